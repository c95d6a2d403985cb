use strum::IntoEnumIterator;
use table::Table;
pub(crate) mod table;

use modelreg::{Model, ModelRegistry, ProviderIdentifier};

use crate::{cli::format_output, ListArgs, ListObject};

pub(crate) fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[derive(serde::Serialize)]
pub(crate) struct ListedModel {
    key: String,
    name: String,
    base_provider: String,
    providers: Vec<ProviderIdentifier>,
}

impl ListedModel {
    pub(crate) fn new(key: &str, model: &Model) -> ListedModel {
        ListedModel {
            key: key.to_string(),
            name: model.name().to_string(),
            base_provider: model.base_provider().to_string(),
            providers: model.best_provider().providers().to_vec(),
        }
    }
}

impl From<Vec<ListedModel>> for Table {
    fn from(value: Vec<ListedModel>) -> Self {
        let mut tab = Table::new();

        tab.set_header(vec!["KEY", "NAME", "BASE_PROVIDER", "PROVIDERS"]);

        for model in value {
            let providers: Vec<String> = model.providers.iter().map(|p| p.to_string()).collect();

            tab.add_row(vec![
                model.key,
                or_dash(&model.name),
                or_dash(&model.base_provider),
                providers.join(","),
            ]);
        }

        tab
    }
}

#[derive(serde::Serialize)]
struct Provider {
    provider: ProviderIdentifier,
    models: usize,
}

impl From<Vec<Provider>> for Table {
    fn from(value: Vec<Provider>) -> Self {
        let mut tab = Table::new();

        tab.set_header(vec!["PROVIDER", "MODELS"]);

        for provider in value {
            tab.add_row(vec![provider.provider.to_string(), provider.models.to_string()]);
        }

        tab
    }
}

fn get_providers(registry: &ModelRegistry) -> Vec<Provider> {
    ProviderIdentifier::iter()
        .map(|id| Provider {
            provider: id,
            models: registry.models_served_by(&id).len(),
        })
        .collect()
}

fn get_models(registry: &ModelRegistry, provider: Option<ProviderIdentifier>) -> Vec<ListedModel> {
    match provider {
        Some(id) => registry
            .models_served_by(&id)
            .into_iter()
            .map(|(key, model)| ListedModel::new(key, model))
            .collect(),
        None => registry
            .iter()
            .map(|(key, model)| ListedModel::new(key, model))
            .collect(),
    }
}

pub(crate) fn list_cmd(registry: &ModelRegistry, args: &ListArgs) {
    let format = args.format;

    match &args.object {
        ListObject::Models(args) => {
            let models = get_models(registry, args.provider);
            format_output(models, format);
        }
        ListObject::Providers => {
            let providers = get_providers(registry);
            format_output(providers, format);
        }
    }
}
