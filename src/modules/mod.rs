//! Built-in handler modules
//!
//! Each module declares its own `REGISTRATION` entry. The directory a module
//! lives in becomes its category.

pub mod commands;
pub mod events;
pub mod slash;

use crate::infrastructure::plugins::RegistrationTable;

/// Registration table of every built-in module
pub fn table() -> RegistrationTable {
    RegistrationTable {
        commands: commands::registrations(),
        events: events::registrations(),
        slash_commands: slash::registrations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_module() {
        let table = table();
        assert_eq!(table.commands.len(), 2);
        assert_eq!(table.events.len(), 3);
        assert_eq!(table.slash_commands.len(), 4);
    }

    #[test]
    fn test_categories_follow_directories() {
        let table = table();
        let categories: Vec<&str> = table.slash_commands.iter().map(|r| r.category()).collect();
        assert!(categories.contains(&"utility"));
        assert!(categories.contains(&"moderation"));
        assert!(categories.contains(&"developer"));
        assert!(table.events.iter().all(|r| r.category() == "client"));
    }
}
