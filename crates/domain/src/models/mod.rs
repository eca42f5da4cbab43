//! Domain models.

pub mod announcement;
pub mod audit_log;
pub mod department;
pub mod read_receipt;
pub mod role;
pub mod user;

pub use announcement::{
    Announcement, AnnouncementDetailResponse, AnnouncementHeader, AnnouncementStatsResponse,
    AnnouncementSummary, CreateAnnouncementRequest, ListAnnouncementsResponse, ReadStats,
    TargetRule, TargetSelection,
};
pub use audit_log::{AuditAction, AuditEvent, CreateAuditEventInput};
pub use department::Department;
pub use read_receipt::{ReadReceipt, ReaderEntry};
pub use role::{Role, WellKnownRoles, ADMIN_ROLE_NAME, EMPLOYEE_ROLE_NAME};
pub use user::{
    AuthUser, LoginRequest, LoginResponse, RegisterRequest, User, UserProfile, UserSummary,
};
