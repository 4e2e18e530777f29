use std::{collections::HashMap, sync::Arc};

use lazy_static::lazy_static;
use log::debug;

use crate::errors::errors::{Error, ErrorImpl};

use super::{grammar::Grammar, moonli};

lazy_static! {
    pub static ref DEFAULT_REGISTRY: Registry = Registry::with_builtin();
}

/// Grammars keyed by language id.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    languages: HashMap<String, Arc<Grammar>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn with_builtin() -> Registry {
        let mut languages = HashMap::new();
        languages.insert(String::from(moonli::LANGUAGE), Arc::clone(&*moonli::MOONLI));

        Registry { languages }
    }

    pub fn register(&mut self, grammar: Grammar) -> Result<(), Error> {
        self.register_shared(Arc::new(grammar))
    }

    pub fn register_shared(&mut self, grammar: Arc<Grammar>) -> Result<(), Error> {
        let language = grammar.language().to_string();
        if self.languages.contains_key(&language) {
            return Err(ErrorImpl::LanguageAlreadyRegistered { language }.into());
        }

        debug!("registered language {:?}", language);
        self.languages.insert(language, grammar);
        Ok(())
    }

    pub fn get(&self, language: &str) -> Result<Arc<Grammar>, Error> {
        self.languages
            .get(language)
            .cloned()
            .ok_or_else(|| {
                ErrorImpl::UnknownLanguage {
                    language: language.to_string(),
                }
                .into()
            })
    }

    pub fn contains(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut languages = self
            .languages
            .keys()
            .map(|language| language.as_str())
            .collect::<Vec<_>>();
        languages.sort_unstable();
        languages
    }
}

pub fn get_language(language: &str) -> Result<Arc<Grammar>, Error> {
    DEFAULT_REGISTRY.get(language)
}
