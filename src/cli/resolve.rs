use modelreg::{die, Error, Model, ModelRegistry, ProviderIdentifier};

use super::list::{or_dash, table::Table};
use crate::cli::format_output;
use crate::color::{MaybePaint, MODEL_KEY};
use crate::{ListingFormat, ResolveArgs};

/// A model together with the order in which its providers should be tried.
#[derive(serde::Serialize)]
struct ResolvedModel {
    /// The key that was looked up, absent for the default model
    key: Option<String>,
    name: String,
    base_provider: String,
    providers: Vec<ProviderIdentifier>,
}

impl ResolvedModel {
    fn new(key: Option<&str>, model: &Model) -> ResolvedModel {
        ResolvedModel {
            key: key.map(|k| k.to_string()),
            name: model.name().to_string(),
            base_provider: model.base_provider().to_string(),
            providers: model.best_provider().providers().to_vec(),
        }
    }

    fn summary(&self) -> String {
        let key = self.key.as_deref().unwrap_or("default");

        format!(
            "{}  name={}  base_provider={}",
            MODEL_KEY.maybe_paint(key),
            or_dash(&self.name),
            or_dash(&self.base_provider)
        )
    }
}

impl From<ResolvedModel> for Table {
    fn from(value: ResolvedModel) -> Self {
        let mut tab = Table::new();

        tab.set_header(vec!["ORDER", "PROVIDER", "ROLE"]);

        for (i, provider) in value.providers.iter().enumerate() {
            tab.add_row(vec![
                (i + 1).to_string(),
                provider.to_string(),
                if i == 0 {
                    "preferred".to_string()
                } else {
                    "fallback".to_string()
                },
            ]);
        }

        tab
    }
}

fn resolve_model(registry: &ModelRegistry, key: Option<&str>) -> Result<ResolvedModel, Error> {
    let model = registry.resolve_or_default(key)?;

    Ok(ResolvedModel::new(key, model))
}

pub(crate) fn resolve_cmd(registry: &ModelRegistry, args: &ResolveArgs) {
    let resolved = match resolve_model(registry, args.model.as_deref()) {
        Ok(resolved) => resolved,
        Err(err) => die!("{}", err),
    };

    if let ListingFormat::Table = args.format {
        println!("{}", resolved.summary());
    }

    format_output(resolved, args.format);
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelreg::builtin;

    #[test]
    fn chain_is_listed_in_preference_order() {
        let registry = builtin().unwrap();
        let model = registry.resolve("llama2-70b").unwrap();

        let mut tab: Table = ResolvedModel::new(Some("llama2-70b"), model).into();
        tab.print_header(false);

        assert_eq!(
            tab.to_string(),
            "1  perplexitylabs  preferred\n\
             2  deepinfra       fallback\n\
             3  llama           fallback\n"
        );
    }

    #[test]
    fn default_model_summary() {
        let registry = builtin().unwrap();
        let model = registry.resolve_or_default(None).unwrap();

        let resolved = ResolvedModel::new(None, model);

        assert_eq!(resolved.summary(), "default  name=-  base_provider=-");
        assert_eq!(
            resolved.providers,
            vec![
                ProviderIdentifier::ChatgptAi,
                ProviderIdentifier::GptGo,
                ProviderIdentifier::You
            ]
        );
    }

    #[test]
    fn json_output_keeps_provider_spelling() {
        let registry = builtin().unwrap();
        let model = registry.resolve("gemini-pro").unwrap();

        let json = serde_json::to_value(ResolvedModel::new(Some("gemini-pro"), model)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "key": "gemini-pro",
                "name": "gemini-pro",
                "base_provider": "google",
                "providers": ["freechatgpt", "geminiprochat"],
            })
        );
    }

    #[test]
    fn unknown_key_reports_unsupported_model() {
        let registry = builtin().unwrap();

        let err = resolve_model(&registry, Some("gpt-5")).err().unwrap();

        assert_eq!(err.to_string(), "model \"gpt-5\" is not supported");
    }
}
