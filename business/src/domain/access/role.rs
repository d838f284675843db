/// Classification of the acting party, used to pick database credentials.
///
/// Wire values are the ones stored in the users table and carried in the
/// session token: `Administrador`, `Funcionario` and `Participante`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Administrator,
    Staff,
    Participant,
}

impl Role {
    /// Exact, case-sensitive match. Unknown values are not an error, they
    /// simply carry no role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Administrador" | "Administrator" => Some(Role::Administrator),
            "Funcionario" => Some(Role::Staff),
            "Participante" => Some(Role::Participant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrador",
            Role::Staff => "Funcionario",
            Role::Participant => "Participante",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
