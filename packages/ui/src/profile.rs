use store::UserRecord;

pub const NO_LOCATION: &str = "Not specified";
pub const NO_BIO: &str = "No bio added yet.";
pub const NO_PORTFOLIO: &str = "Not provided";

/// Display values for the profile page, with placeholders filled in for the
/// fields the user left empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub title: String,
    pub location: String,
    pub bio: String,
    /// Link text: the portfolio URL, or a placeholder.
    pub portfolio_label: String,
    /// Link target: the portfolio URL, or `#`.
    pub portfolio_href: String,
    pub avatar_url: String,
}

impl ProfileCard {
    pub fn from_record(record: &UserRecord) -> Self {
        let or = |value: &str, placeholder: &str| {
            if value.is_empty() {
                placeholder.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            name: record.name.clone(),
            title: record.title.clone(),
            location: or(&record.location, NO_LOCATION),
            bio: or(&record.bio, NO_BIO),
            portfolio_label: or(&record.portfolio, NO_PORTFOLIO),
            portfolio_href: or(&record.portfolio, "#"),
            avatar_url: avatar_url(&record.email),
        }
    }
}

/// Placeholder avatar seeded by the account email.
pub fn avatar_url(email: &str) -> String {
    format!("https://i.pravatar.cc/100?u={email}")
}
