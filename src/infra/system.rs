//! # System Languages Module / 系统语言模块
//!
//! Sources for the host's preferred language list, consulted once at startup
//! when no language has been chosen yet.
//!
//! 主机首选语言列表的来源，在尚未选择语言时于启动时查询一次。

/// The host's preferred languages, most preferred first.
/// An empty list means the host did not report any.
pub trait SystemLanguages {
    fn preferred_languages(&self) -> Vec<String>;
}

/// Reads the operating system's locale list through `sys-locale`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostLanguages;

impl SystemLanguages for HostLanguages {
    fn preferred_languages(&self) -> Vec<String> {
        sys_locale::get_locales().collect()
    }
}

/// A caller-supplied list, for embedding hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct FixedLanguages(pub Vec<String>);

impl FixedLanguages {
    /// A host that reports no languages at all.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(languages.into_iter().map(Into::into).collect())
    }
}

impl SystemLanguages for FixedLanguages {
    fn preferred_languages(&self) -> Vec<String> {
        self.0.clone()
    }
}
