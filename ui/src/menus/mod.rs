//! The top menu bar and its dropdowns.
//!
//! What appears where is decided by [`MenuLayout`] and [`dropdown_entries`],
//! which are plain functions of the user and flags; the components only
//! render them.

pub mod dropdown;
pub mod menu_bar;

use api::user::User;

use crate::dialogs::DialogKind;

/// The menu buttons that open a dropdown rather than a dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum MenuKind {
    Help,
    Contact,
    Settings,
    Share,
    Identity,
}

impl MenuKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Help => "Help",
            Self::Contact => "Contact",
            Self::Settings => "Settings",
            Self::Share => "Share",
            Self::Identity => "Account",
        }
    }
}

/// One item in the menu bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Title,
    Dropdown(MenuKind),
    /// Opens a dialog directly.
    Dialog(DialogKind),
    /// Opens an empty street in a new tab.
    NewStreet,
    SignIn,
    /// The signed-in user's menu, labelled with their name.
    Avatar(String),
}

impl MenuEntry {
    pub fn label(&self) -> String {
        match self {
            Self::Title => "Streets".to_string(),
            Self::Dropdown(kind) => kind.label().to_string(),
            Self::Dialog(kind) => dialog_label(*kind).to_string(),
            Self::NewStreet => "New street".to_string(),
            Self::SignIn => "Sign in".to_string(),
            Self::Avatar(name) => name.clone(),
        }
    }
}

fn dialog_label(kind: DialogKind) -> &'static str {
    match kind {
        DialogKind::About => "About",
        DialogKind::Analytics => "Analytics",
        DialogKind::FeatureFlags => "Feature flags",
        DialogKind::Geotag => "Location",
        DialogKind::SaveAsImage => "Save as image",
        DialogKind::SignIn => "Sign in",
        DialogKind::WhatsNew => "What's new",
        DialogKind::Newsletter => "Newsletter",
        DialogKind::Upgrade => "Upgrade",
        DialogKind::SentimentSurvey => "Give feedback",
        DialogKind::Metadata => "Metadata",
        DialogKind::Admin => "Admin",
        DialogKind::MetadataMissing => "Missing metadata",
        DialogKind::AdminMap => "Admin map",
    }
}

/// The left and right halves of the menu bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuLayout {
    pub left: Vec<MenuEntry>,
    pub right: Vec<MenuEntry>,
}

impl MenuLayout {
    pub fn new(user: Option<&User>, offline: bool, business_plan: bool) -> Self {
        let is_admin = user.is_some_and(User::is_admin);
        let is_user = user.is_some_and(User::is_user);

        let mut left = vec![MenuEntry::Title];
        if is_admin {
            left.push(MenuEntry::Dialog(DialogKind::Admin));
            left.push(MenuEntry::Dialog(DialogKind::AdminMap));
        }
        left.push(MenuEntry::Dropdown(MenuKind::Help));
        if !offline {
            left.push(MenuEntry::Dropdown(MenuKind::Contact));
            if business_plan {
                left.push(MenuEntry::Dialog(DialogKind::Upgrade));
            }
        }

        let mut right = vec![MenuEntry::NewStreet, MenuEntry::Dropdown(MenuKind::Settings)];
        if is_user {
            right.push(MenuEntry::Dialog(DialogKind::Metadata));
        }
        right.push(MenuEntry::Dropdown(MenuKind::Share));
        if !offline {
            right.push(match user {
                Some(user) => MenuEntry::Avatar(user.label().to_string()),
                None => MenuEntry::SignIn,
            });
        }

        Self { left, right }
    }
}

/// What a dropdown entry does when picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownAction {
    Open(DialogKind),
    SignOut,
}

impl DropdownAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open(kind) => dialog_label(*kind),
            Self::SignOut => "Sign out",
        }
    }
}

pub fn dropdown_entries(kind: MenuKind) -> Vec<DropdownAction> {
    use DropdownAction::*;
    match kind {
        MenuKind::Help => vec![
            Open(DialogKind::About),
            Open(DialogKind::WhatsNew),
            Open(DialogKind::Analytics),
        ],
        MenuKind::Contact => vec![
            Open(DialogKind::Newsletter),
            Open(DialogKind::SentimentSurvey),
        ],
        MenuKind::Settings => vec![Open(DialogKind::FeatureFlags)],
        MenuKind::Share => vec![Open(DialogKind::SaveAsImage), Open(DialogKind::Geotag)],
        MenuKind::Identity => vec![SignOut],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::user::UserRole;
    use strum::IntoEnumIterator;

    fn user(roles: Vec<UserRole>) -> User {
        User {
            id: "u1".to_string(),
            display_name: Some("Jane".to_string()),
            roles,
        }
    }

    #[test]
    fn anonymous_online_layout() {
        let layout = MenuLayout::new(None, false, false);
        assert_eq!(
            layout.left,
            vec![
                MenuEntry::Title,
                MenuEntry::Dropdown(MenuKind::Help),
                MenuEntry::Dropdown(MenuKind::Contact),
            ]
        );
        assert_eq!(
            layout.right,
            vec![
                MenuEntry::NewStreet,
                MenuEntry::Dropdown(MenuKind::Settings),
                MenuEntry::Dropdown(MenuKind::Share),
                MenuEntry::SignIn,
            ]
        );
    }

    #[test]
    fn admins_get_admin_items_and_users_get_metadata() {
        let admin = user(vec![UserRole::Admin]);
        let layout = MenuLayout::new(Some(&admin), false, false);
        assert!(layout.left.contains(&MenuEntry::Dialog(DialogKind::Admin)));
        assert!(layout.left.contains(&MenuEntry::Dialog(DialogKind::AdminMap)));
        assert!(!layout.right.contains(&MenuEntry::Dialog(DialogKind::Metadata)));
        assert_eq!(layout.right.last(), Some(&MenuEntry::Avatar("Jane".to_string())));

        let member = user(vec![UserRole::User]);
        let layout = MenuLayout::new(Some(&member), false, false);
        assert!(!layout.left.contains(&MenuEntry::Dialog(DialogKind::Admin)));
        assert!(layout.right.contains(&MenuEntry::Dialog(DialogKind::Metadata)));
    }

    #[test]
    fn offline_hides_network_items() {
        let member = user(vec![UserRole::User]);
        let layout = MenuLayout::new(Some(&member), true, true);
        assert!(!layout.left.contains(&MenuEntry::Dropdown(MenuKind::Contact)));
        assert!(!layout.left.contains(&MenuEntry::Dialog(DialogKind::Upgrade)));
        assert!(!layout.right.iter().any(|e| matches!(e, MenuEntry::Avatar(_) | MenuEntry::SignIn)));
    }

    #[test]
    fn upgrade_needs_the_business_plan_flag() {
        assert!(!MenuLayout::new(None, false, false)
            .left
            .contains(&MenuEntry::Dialog(DialogKind::Upgrade)));
        assert!(MenuLayout::new(None, false, true)
            .left
            .contains(&MenuEntry::Dialog(DialogKind::Upgrade)));
    }

    #[test]
    fn every_dropdown_has_entries() {
        for kind in MenuKind::iter() {
            assert!(!dropdown_entries(kind).is_empty(), "{kind:?}");
        }
        assert_eq!(dropdown_entries(MenuKind::Identity), vec![DropdownAction::SignOut]);
        assert_eq!(DropdownAction::Open(DialogKind::SaveAsImage).label(), "Save as image");
    }
}
