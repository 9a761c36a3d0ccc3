use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// The fixed directory of companies shown in the picker.
///
/// Row order is the declaration order, so `Company::iter().nth(row)` is stable.
#[derive(Clone, Copy, Debug, EnumCountMacro, EnumIter, Eq, Hash, PartialEq)]
pub enum Company {
    Apple,
    Microsoft,
    Google,
    Amazon,
    Facebook,
}

impl Company {
    pub fn name(&self) -> &'static str {
        match self {
            Company::Apple => "Apple",
            Company::Microsoft => "Microsoft",
            Company::Google => "Google",
            Company::Amazon => "Amazon",
            Company::Facebook => "Facebook",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Company::Apple => "AAPL",
            Company::Microsoft => "MSFT",
            Company::Google => "GOOG",
            Company::Amazon => "AMZN",
            Company::Facebook => "FB",
        }
    }

    pub fn count() -> usize {
        Self::COUNT
    }

    pub fn from_row(row: usize) -> Option<Company> {
        Self::iter().nth(row)
    }

    /// Looks a company up by display name or ticker, ignoring case.
    pub fn find(query: &str) -> Option<Company> {
        let query = query.trim();
        Self::iter().find(|c| {
            c.name().eq_ignore_ascii_case(query) || c.symbol().eq_ignore_ascii_case(query)
        })
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
