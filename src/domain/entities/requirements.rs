use serenity::all::Permissions;

/// Preconditions a command declares before it may run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    pub developer_only: bool,
    pub user_permissions: Option<Permissions>,
    pub client_permissions: Option<Permissions>,
    pub guild_only: bool,
}

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn developer_only(mut self) -> Self {
        self.developer_only = true;
        self
    }

    pub fn user_permissions(mut self, permissions: Permissions) -> Self {
        self.user_permissions = Some(permissions);
        self
    }

    pub fn client_permissions(mut self, permissions: Permissions) -> Self {
        self.client_permissions = Some(permissions);
        self
    }

    pub fn guild_only(mut self) -> Self {
        self.guild_only = true;
        self
    }
}

/// Human readable list of permission names, e.g. "Manage Messages, Send Messages"
pub fn describe_permissions(permissions: Permissions) -> String {
    permissions.get_permission_names().join(", ")
}
