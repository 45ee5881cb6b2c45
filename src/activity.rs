//! Activity event classification
//!
//! The activity feed lists audit events by code, e.g. `peer.add` or
//! `setupkey.revoke`. This module maps a code to the icon shown next to it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon identifiers used by the activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityIcon {
    MonitorSmartphone,
    User,
    ArrowLeftRight,
    Shield,
    KeyRound,
    #[serde(rename = "folder-git-2")]
    FolderGit,
    Network,
    Globe,
    Server,
    LogIn,
    Blocks,
    Cog,
    CreditCard,
    ShieldCheck,
    RefreshCcw,
    #[serde(rename = "layers-3")]
    Layers,
    HelpCircle,
}

// First match wins
const PREFIXES: &[(&str, ActivityIcon)] = &[
    ("peer", ActivityIcon::MonitorSmartphone),
    ("user", ActivityIcon::User),
    ("account", ActivityIcon::User),
    ("rule", ActivityIcon::ArrowLeftRight),
    ("policy", ActivityIcon::Shield),
    ("setupkey", ActivityIcon::KeyRound),
    ("group", ActivityIcon::FolderGit),
    ("route", ActivityIcon::Network),
    ("dns", ActivityIcon::Globe),
    ("nameserver", ActivityIcon::Server),
    ("dashboard", ActivityIcon::LogIn),
    ("integration", ActivityIcon::Blocks),
    ("personal", ActivityIcon::User),
    ("service", ActivityIcon::Cog),
    ("billing", ActivityIcon::CreditCard),
    ("integrated", ActivityIcon::ShieldCheck),
    ("posture", ActivityIcon::ShieldCheck),
    ("transferred", ActivityIcon::RefreshCcw),
    ("resource", ActivityIcon::Layers),
    ("network", ActivityIcon::Network),
];

impl ActivityIcon {
    /// Picks the icon for an activity code by its prefix
    ///
    /// Unknown codes get `HelpCircle`.
    ///
    /// # Examples
    /// ```
    /// use netconsole::ActivityIcon;
    ///
    /// assert_eq!(ActivityIcon::for_code("setupkey.add"), ActivityIcon::KeyRound);
    /// assert_eq!(ActivityIcon::for_code("something.else"), ActivityIcon::HelpCircle);
    /// ```
    pub fn for_code(code: &str) -> Self {
        PREFIXES
            .iter()
            .find(|(prefix, _)| code.starts_with(*prefix))
            .map(|(_, icon)| *icon)
            .unwrap_or(ActivityIcon::HelpCircle)
    }

    /// Icon identifier as used by the icon set
    pub fn name(&self) -> &'static str {
        match self {
            ActivityIcon::MonitorSmartphone => "monitor-smartphone",
            ActivityIcon::User => "user",
            ActivityIcon::ArrowLeftRight => "arrow-left-right",
            ActivityIcon::Shield => "shield",
            ActivityIcon::KeyRound => "key-round",
            ActivityIcon::FolderGit => "folder-git-2",
            ActivityIcon::Network => "network",
            ActivityIcon::Globe => "globe",
            ActivityIcon::Server => "server",
            ActivityIcon::LogIn => "log-in",
            ActivityIcon::Blocks => "blocks",
            ActivityIcon::Cog => "cog",
            ActivityIcon::CreditCard => "credit-card",
            ActivityIcon::ShieldCheck => "shield-check",
            ActivityIcon::RefreshCcw => "refresh-ccw",
            ActivityIcon::Layers => "layers-3",
            ActivityIcon::HelpCircle => "help-circle",
        }
    }
}

impl fmt::Display for ActivityIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
