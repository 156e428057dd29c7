use serde_json::Value;

use crate::modules::document_store::application::domain::entities::Fields;
use crate::modules::localization::application::domain::lang::Lang;

/// `("title", De)` -> `"title_de"`.
pub fn localized_key(base: &str, lang: Lang) -> String {
    format!("{}_{}", base, lang.code())
}

/// Order in which locales are tried for the given active language.
///
/// Fixed for every caller: active, then English, then Arabic.
pub fn fallback_chain(active: Lang) -> [Lang; 3] {
    [active, Lang::En, Lang::Ar]
}

/// Best stored value of a suffix-localized field, or `None` when every
/// locale in the chain is absent or blank.
pub fn resolve_field<'a>(fields: &'a Fields, base: &str, active: Lang) -> Option<&'a str> {
    fallback_chain(active).into_iter().find_map(|lang| {
        fields
            .get(&localized_key(base, lang))
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    })
}
