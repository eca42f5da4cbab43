//! Entity definitions (database row mappings).

pub mod announcement;
pub mod audit_log;
pub mod department;
pub mod read_receipt;
pub mod role;
pub mod user;

pub use announcement::{AnnouncementEntity, AnnouncementTargetEntity, AnnouncementWithAuthorEntity};
pub use audit_log::AuditEventEntity;
pub use department::DepartmentEntity;
pub use read_receipt::{ReadReceiptEntity, ReaderRowEntity};
pub use role::RoleEntity;
pub use user::{UserEntity, UserProfileEntity};
