//! Gate chain - preconditions evaluated before a command runs

use crate::application::errors::DispatchError;
use crate::domain::entities::{describe_permissions, Invoker, Requirements};

/// What a gate looks at
#[derive(Debug, Clone, Copy)]
pub struct GateInput<'a> {
    pub command_name: &'a str,
    pub requirements: &'a Requirements,
    pub invoker: &'a Invoker,
}

/// Result of a gate check
pub type GateResult = Result<(), GateError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// Stop processing and answer the invoker with this message
    Rejected(String),
    /// The gate could not be evaluated
    Unresolvable(DispatchError),
}

impl std::fmt::Display for GateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateError::Rejected(msg) => write!(f, "Rejected: {}", msg),
            GateError::Unresolvable(e) => write!(f, "Unresolvable: {}", e),
        }
    }
}

impl std::error::Error for GateError {}

/// Gate trait - one precondition, checked in chain order
pub trait Gate: Send + Sync {
    fn check(&self, input: &GateInput<'_>) -> GateResult;
}

/// Ordered list of gates; the first failure short-circuits
pub struct GateChain {
    gates: Vec<Box<dyn Gate>>,
}

impl GateChain {
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    pub fn add<G: Gate + 'static>(mut self, gate: G) -> Self {
        self.gates.push(Box::new(gate));
        self
    }

    /// developer → user permissions → bot permissions → guild scope
    pub fn standard(developers: Vec<String>) -> Self {
        Self::new()
            .add(DeveloperGate::new(developers))
            .add(UserPermissionGate)
            .add(ClientPermissionGate)
            .add(GuildOnlyGate)
    }

    pub fn check(&self, input: &GateInput<'_>) -> GateResult {
        for gate in &self.gates {
            gate.check(input)?;
        }
        Ok(())
    }
}

impl Default for GateChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Developer-only commands run for allow-listed user ids only
pub struct DeveloperGate {
    developers: Vec<String>,
}

impl DeveloperGate {
    pub fn new(developers: Vec<String>) -> Self {
        Self { developers }
    }
}

impl Gate for DeveloperGate {
    fn check(&self, input: &GateInput<'_>) -> GateResult {
        if !input.requirements.developer_only {
            return Ok(());
        }
        if self.developers.iter().any(|id| *id == input.invoker.user_id) {
            return Ok(());
        }
        Err(GateError::Rejected(format!(
            "{} is a developer only command",
            input.command_name
        )))
    }
}

pub struct UserPermissionGate;

impl Gate for UserPermissionGate {
    fn check(&self, input: &GateInput<'_>) -> GateResult {
        let Some(required) = input.requirements.user_permissions.filter(|p| !p.is_empty()) else {
            return Ok(());
        };
        let actual = input
            .invoker
            .member_permissions
            .ok_or(GateError::Unresolvable(DispatchError::MemberPermissionsUnavailable))?;

        if actual.contains(required) {
            return Ok(());
        }
        Err(GateError::Rejected(format!(
            "You do not have the required permissions to use this command. You need the following permissions: {}",
            describe_permissions(required.difference(actual))
        )))
    }
}

pub struct ClientPermissionGate;

impl Gate for ClientPermissionGate {
    fn check(&self, input: &GateInput<'_>) -> GateResult {
        let Some(required) = input.requirements.client_permissions.filter(|p| !p.is_empty()) else {
            return Ok(());
        };
        let actual = input
            .invoker
            .bot_permissions
            .ok_or(GateError::Unresolvable(DispatchError::BotPermissionsUnavailable))?;

        if actual.contains(required) {
            return Ok(());
        }
        Err(GateError::Rejected(format!(
            "I do not have the required permissions to use this command. I need the following permissions: {}",
            describe_permissions(required.difference(actual))
        )))
    }
}

pub struct GuildOnlyGate;

impl Gate for GuildOnlyGate {
    fn check(&self, input: &GateInput<'_>) -> GateResult {
        if input.requirements.guild_only && input.invoker.guild_id.is_none() {
            return Err(GateError::Rejected(format!(
                "{} is a guild only command",
                input.command_name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::Permissions;

    fn check(req: &Requirements, invoker: &Invoker) -> GateResult {
        GateChain::standard(vec!["42".to_string()]).check(&GateInput {
            command_name: "cmd",
            requirements: req,
            invoker,
        })
    }

    fn rejected(result: GateResult) -> String {
        match result {
            Err(GateError::Rejected(msg)) => msg,
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_unrestricted_passes_in_dm() {
        assert_eq!(check(&Requirements::new(), &Invoker::new("1", "c")), Ok(()));
    }

    #[test]
    fn test_developer_gate() {
        let req = Requirements::new().developer_only();
        assert_eq!(check(&req, &Invoker::new("42", "c")), Ok(()));
        assert_eq!(
            rejected(check(&req, &Invoker::new("7", "c"))),
            "cmd is a developer only command"
        );
    }

    #[test]
    fn test_developer_gate_runs_before_permission_gates() {
        // would also fail the user permission gate and the guild gate
        let req = Requirements::new()
            .developer_only()
            .user_permissions(Permissions::ADMINISTRATOR)
            .guild_only();
        let invoker = Invoker::new("7", "c").with_member_permissions(Permissions::empty());

        assert_eq!(rejected(check(&req, &invoker)), "cmd is a developer only command");
    }

    #[test]
    fn test_user_permissions_list_missing() {
        let req = Requirements::new()
            .user_permissions(Permissions::MANAGE_MESSAGES | Permissions::SEND_MESSAGES);
        let invoker = Invoker::new("1", "c")
            .in_guild("g")
            .with_member_permissions(Permissions::SEND_MESSAGES);

        let msg = rejected(check(&req, &invoker));
        assert!(msg.starts_with("You do not have the required permissions"));
        assert!(msg.ends_with("Manage Messages"), "{msg}");
    }

    #[test]
    fn test_user_permissions_before_client_permissions() {
        let req = Requirements::new()
            .user_permissions(Permissions::MANAGE_MESSAGES)
            .client_permissions(Permissions::MANAGE_MESSAGES);
        let invoker = Invoker::new("1", "c")
            .in_guild("g")
            .with_member_permissions(Permissions::empty())
            .with_bot_permissions(Permissions::empty());

        assert!(rejected(check(&req, &invoker)).starts_with("You do not"));
    }

    #[test]
    fn test_client_permissions() {
        let req = Requirements::new().client_permissions(Permissions::EMBED_LINKS);
        let lacking = Invoker::new("1", "c")
            .in_guild("g")
            .with_bot_permissions(Permissions::SEND_MESSAGES);
        let granted = lacking.clone().with_bot_permissions(Permissions::all());

        assert!(rejected(check(&req, &lacking)).starts_with("I do not have the required permissions"));
        assert_eq!(check(&req, &granted), Ok(()));
    }

    #[test]
    fn test_missing_permission_set_is_unresolvable() {
        let req = Requirements::new().user_permissions(Permissions::SEND_MESSAGES);
        assert_eq!(
            check(&req, &Invoker::new("1", "c")),
            Err(GateError::Unresolvable(DispatchError::MemberPermissionsUnavailable))
        );
    }

    #[test]
    fn test_guild_only() {
        let req = Requirements::new().guild_only();
        assert_eq!(rejected(check(&req, &Invoker::new("1", "c"))), "cmd is a guild only command");
        assert_eq!(check(&req, &Invoker::new("1", "c").in_guild("g")), Ok(()));
    }
}
