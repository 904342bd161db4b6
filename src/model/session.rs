/// Client-side identity of the signed-in user.
///
/// An empty string is treated the same as an absent field everywhere a
/// session is persisted or checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    pub fn new(token: &str, username: &str, display_name: Option<String>) -> Self {
        Self {
            token: non_empty(token),
            username: non_empty(username),
            display_name: display_name.filter(|s| !s.is_empty()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Drops username and display name when there is no token.
    pub fn normalized(self) -> Self {
        if self.is_authenticated() {
            self
        } else {
            Self::default()
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
