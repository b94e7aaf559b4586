//! Team member records.
//!
//! Members carry a generated id, a display color picked from a fixed
//! palette, and initials derived from the name. Deactivating a member hides
//! them from assignment but keeps historical references on tasks; only
//! explicit deletion removes those references (see `Store::delete_member`).

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display colors assigned round-robin-by-chance to new members.
pub const MEMBER_PALETTE: [&str; 7] = [
    "#3399FF", // blue
    "#CC3333", // red
    "#33CC33", // green
    "#CC9933", // orange
    "#9933CC", // purple
    "#33CCCC", // cyan
    "#CC33CC", // magenta
];

/// A named collaborator who can be assigned to tasks and subtasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub color: String,
    pub initials: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl TeamMember {
    pub fn new(name: &str, role: &str) -> Self {
        let mut rng = rand::thread_rng();
        let color = MEMBER_PALETTE[rng.gen_range(0..MEMBER_PALETTE.len())];
        TeamMember {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            role: role.to_string(),
            color: color.to_string(),
            initials: initials_for(name),
            is_active: true,
        }
    }
}

/// Derive display initials from a name.
///
/// One word yields its first two characters uppercased (or the single
/// character for a one-letter name); several words yield the first
/// character of the first and last words.
pub fn initials_for(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => "??".to_string(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => {
            let mut initials = String::new();
            initials.extend(first.chars().next());
            initials.extend(last.chars().next());
            initials.to_uppercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_full_name() {
        assert_eq!(initials_for("Ada Lovelace"), "AL");
        assert_eq!(initials_for("Grace Brewster Murray Hopper"), "GH");
    }

    #[test]
    fn initials_from_single_word() {
        assert_eq!(initials_for("Ada"), "AD");
        assert_eq!(initials_for("x"), "X");
    }

    #[test]
    fn initials_from_empty_name() {
        assert_eq!(initials_for(""), "??");
        assert_eq!(initials_for("   "), "??");
    }

    #[test]
    fn new_member_uses_palette_and_is_active() {
        let m = TeamMember::new("Ada Lovelace", "Engineer");
        assert!(MEMBER_PALETTE.contains(&m.color.as_str()));
        assert!(m.is_active);
        assert_eq!(m.initials, "AL");
        assert_ne!(m.id, TeamMember::new("Ada Lovelace", "Engineer").id);
    }
}
