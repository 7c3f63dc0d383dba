// src/common/i18n.rs

use std::collections::HashMap;

// Idioma usado quando o cliente pede algo que não temos catálogo
pub const DEFAULT_LANG: &str = "pt";

const CATALOGS: &[(&str, &str)] = &[
    ("pt", include_str!("../../locales/pt.json")),
    ("en", include_str!("../../locales/en.json")),
];

/// Catálogos de mensagens (idioma -> chave -> texto), carregados uma vez na inicialização.
#[derive(Debug, Clone)]
pub struct I18nStore {
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl I18nStore {
    pub fn load() -> Result<Self, serde_json::Error> {
        let mut catalogs = HashMap::new();
        for (lang, raw) in CATALOGS {
            let messages: HashMap<String, String> = serde_json::from_str(raw)?;
            catalogs.insert(lang.to_string(), messages);
        }
        Ok(Self { catalogs })
    }

    /// Busca a chave no idioma pedido, caindo para o idioma padrão.
    pub fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
        self.catalogs
            .get(lang)
            .and_then(|messages| messages.get(key))
            .or_else(|| {
                self.catalogs
                    .get(DEFAULT_LANG)
                    .and_then(|messages| messages.get(key))
            })
            .map(String::as_str)
    }

    // Sem tradução, devolve a própria chave
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.lookup(lang, key).unwrap_or(key).to_string()
    }
}
