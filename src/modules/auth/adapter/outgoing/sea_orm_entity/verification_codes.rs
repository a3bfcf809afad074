use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::VerificationKind, ports::outgoing::VerificationCodeRecord,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "verification_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub kind: String,
    pub expires_at: DateTimeWithTimeZone,
    pub used: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> VerificationCodeRecord {
        VerificationCodeRecord {
            id: self.id,
            email: self.email.clone(),
            code: self.code.clone(),
            kind: VerificationKind::parse(&self.kind)
                .unwrap_or(VerificationKind::EmailVerification),
            expires_at: self.expires_at.with_timezone(&chrono::Utc),
            used: self.used,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
