//! Repository layer.

pub mod announcement;
pub mod audit_log;
pub mod department;
pub mod read_receipt;
pub mod role;
pub mod user;

pub use announcement::AnnouncementRepository;
pub use audit_log::AuditLogRepository;
pub use department::DepartmentRepository;
pub use read_receipt::ReadReceiptRepository;
pub use role::RoleRepository;
pub use user::UserRepository;
