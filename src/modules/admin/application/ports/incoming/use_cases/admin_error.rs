#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminInputError {
    #[error("Statut d'approbation inconnu: {0}")]
    UnknownApprovalStatus(String),

    #[error("Statut de réservation inconnu: {0}")]
    UnknownBookingStatus(String),

    #[error("Rôle inconnu: {0}")]
    UnknownRole(String),

    #[error("Type d'export inconnu: {0}")]
    UnknownExportKind(String),

    #[error("Date invalide")]
    InvalidDate,

    #[error("Le prix doit être positif")]
    NegativePrice,

    #[error("L'expérience doit être positive")]
    NegativeExperience,

    #[error("Le nom complet ne peut pas être vide")]
    EmptyFullName,

    #[error("Numéro de téléphone invalide")]
    InvalidPhone,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminError {
    #[error("Not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Blank optional strings count as absent.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
