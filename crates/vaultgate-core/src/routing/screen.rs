use std::fmt;

/// Top-level screens of the stack navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Welcome,
    Login,
    Register,
    /// Tabbed composite of `Tab::all()`.
    MainApp,
}

impl Screen {
    pub fn key(self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Login => "Login",
            Screen::Register => "Register",
            Screen::MainApp => "MainApp",
        }
    }

    pub fn all() -> &'static [Screen] {
        &[Screen::Welcome, Screen::Login, Screen::Register, Screen::MainApp]
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Tabs inside `Screen::MainApp`. Labels are the route keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    MyFiles,
    Encrypt,
    Profile,
}

impl Tab {
    pub fn key(self) -> &'static str {
        match self {
            Tab::MyFiles => "My Files",
            Tab::Encrypt => "Encrypt",
            Tab::Profile => "Profile",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::MyFiles, Tab::Encrypt, Tab::Profile]
    }

    pub fn index(self) -> usize {
        match self {
            Tab::MyFiles => 0,
            Tab::Encrypt => 1,
            Tab::Profile => 2,
        }
    }

    pub fn next(self) -> Tab {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(self) -> Tab {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Tab::MyFiles.next(), Tab::Encrypt);
        assert_eq!(Tab::Profile.next(), Tab::MyFiles);
        assert_eq!(Tab::MyFiles.prev(), Tab::Profile);
    }

    #[test]
    fn test_keys_are_distinct() {
        let mut keys: Vec<&str> = Screen::all().iter().map(|s| s.key()).collect();
        keys.extend(Tab::all().iter().map(|t| t.key()));
        let count = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), count);
    }
}
