//! State-changing operations and the reads they make stale

use super::key::QueryGroup;
use crate::session::Role;

/// Every operation that changes server state.
///
/// [`Mutation::invalidates`] is the dependency table between writes and
/// reads. It is an exhaustive match: a new variant does not compile until it
/// declares what it invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    // Admin
    VerifySubmission,
    FlagSubmission,
    RejectSubmission,
    ApprovePhoto,
    FeaturePhoto,
    RejectPhoto,
    DeletePhoto,
    BulkApprovePhotos,
    BulkRejectPhotos,
    ApproveProject,
    FeatureProject,
    RejectProject,
    EditProjectForSponsor,
    UpdateStatusBanner,
    UpdateFinancialSummary,
    // Trainer
    SubmitSession,
    AddProject,
    UpdateProfile,
    AddStudent,
    UpdateStudent,
    DeleteStudent,
}

const ADMIN_GROUPS: &[QueryGroup] = &[QueryGroup::Swinfy, QueryGroup::Admin];

impl Mutation {
    pub const ALL: [Mutation; 21] = [
        Mutation::VerifySubmission,
        Mutation::FlagSubmission,
        Mutation::RejectSubmission,
        Mutation::ApprovePhoto,
        Mutation::FeaturePhoto,
        Mutation::RejectPhoto,
        Mutation::DeletePhoto,
        Mutation::BulkApprovePhotos,
        Mutation::BulkRejectPhotos,
        Mutation::ApproveProject,
        Mutation::FeatureProject,
        Mutation::RejectProject,
        Mutation::EditProjectForSponsor,
        Mutation::UpdateStatusBanner,
        Mutation::UpdateFinancialSummary,
        Mutation::SubmitSession,
        Mutation::AddProject,
        Mutation::UpdateProfile,
        Mutation::AddStudent,
        Mutation::UpdateStudent,
        Mutation::DeleteStudent,
    ];

    /// Query groups marked stale after this mutation succeeds.
    pub fn invalidates(&self) -> &'static [QueryGroup] {
        match self {
            Mutation::VerifySubmission
            | Mutation::FlagSubmission
            | Mutation::RejectSubmission
            | Mutation::ApprovePhoto
            | Mutation::FeaturePhoto
            | Mutation::RejectPhoto
            | Mutation::DeletePhoto
            | Mutation::BulkApprovePhotos
            | Mutation::BulkRejectPhotos
            | Mutation::ApproveProject
            | Mutation::FeatureProject
            | Mutation::RejectProject
            | Mutation::EditProjectForSponsor
            | Mutation::UpdateStatusBanner
            | Mutation::UpdateFinancialSummary => ADMIN_GROUPS,
            Mutation::SubmitSession | Mutation::AddProject => &[QueryGroup::Trainer],
            Mutation::UpdateProfile => &[QueryGroup::TrainerProfile],
            Mutation::AddStudent | Mutation::DeleteStudent => {
                &[QueryGroup::TrainerStudents, QueryGroup::TrainerSummary]
            }
            Mutation::UpdateStudent => &[QueryGroup::TrainerStudents],
        }
    }

    /// Role allowed to perform this mutation.
    pub fn role(&self) -> Role {
        match self {
            Mutation::SubmitSession
            | Mutation::AddProject
            | Mutation::UpdateProfile
            | Mutation::AddStudent
            | Mutation::UpdateStudent
            | Mutation::DeleteStudent => Role::Trainer,
            _ => Role::Admin,
        }
    }

    /// Human-readable name used in progress and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Mutation::VerifySubmission => "verify submission",
            Mutation::FlagSubmission => "flag submission",
            Mutation::RejectSubmission => "reject submission",
            Mutation::ApprovePhoto => "approve photo",
            Mutation::FeaturePhoto => "feature photo",
            Mutation::RejectPhoto => "reject photo",
            Mutation::DeletePhoto => "delete photo",
            Mutation::BulkApprovePhotos => "bulk approve photos",
            Mutation::BulkRejectPhotos => "bulk reject photos",
            Mutation::ApproveProject => "approve project",
            Mutation::FeatureProject => "feature project",
            Mutation::RejectProject => "reject project",
            Mutation::EditProjectForSponsor => "edit project",
            Mutation::UpdateStatusBanner => "update status banner",
            Mutation::UpdateFinancialSummary => "update financial summary",
            Mutation::SubmitSession => "submit session",
            Mutation::AddProject => "add project",
            Mutation::UpdateProfile => "update profile",
            Mutation::AddStudent => "add student",
            Mutation::UpdateStudent => "update student",
            Mutation::DeleteStudent => "delete student",
        }
    }
}
