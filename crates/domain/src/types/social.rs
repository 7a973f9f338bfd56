//! Social links

use serde::{Deserialize, Serialize};

/// Stored social link; at most one per (profile, platform)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub id: i64,
    pub profile_id: i64,
    /// Free text in storage; the edit form manages [`SocialPlatform`] names
    pub platform: String,
    pub url: String,
}

/// Platforms managed by the edit-profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    LinkedIn,
    Twitter,
    Instagram,
    GitHub,
}

crate::impl_domain_status_conversions!(SocialPlatform {
    LinkedIn => "LinkedIn",
    Twitter => "Twitter",
    Instagram => "Instagram",
    GitHub => "GitHub",
});

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 4] = [Self::LinkedIn, Self::Twitter, Self::Instagram, Self::GitHub];
}

/// Social URLs as submitted by the edit form; `None` or blank means remove
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub github: Option<String>,
}

impl SocialLinks {
    /// Submitted URL for a platform, trimmed, `None` when blank
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        let raw = match platform {
            SocialPlatform::LinkedIn => &self.linkedin,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::GitHub => &self.github,
        };
        raw.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    /// Every managed platform with its submitted URL
    pub fn entries(&self) -> impl Iterator<Item = (SocialPlatform, Option<&str>)> + '_ {
        SocialPlatform::ALL.into_iter().map(move |platform| (platform, self.get(platform)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_links_read_as_absent() {
        let links = SocialLinks {
            github: Some("  https://github.com/alice  ".into()),
            twitter: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(links.get(SocialPlatform::GitHub), Some("https://github.com/alice"));
        assert_eq!(links.get(SocialPlatform::Twitter), None);
        assert_eq!(links.entries().filter(|(_, url)| url.is_some()).count(), 1);
    }

    #[test]
    fn platform_parses_any_case() {
        assert_eq!("github".parse::<SocialPlatform>().unwrap(), SocialPlatform::GitHub);
        assert_eq!(SocialPlatform::LinkedIn.to_string(), "LinkedIn");
    }
}
