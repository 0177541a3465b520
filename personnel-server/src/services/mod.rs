//! Use-case services
//!
//! Each service takes the proposer's employee id first and runs its own
//! authorization before touching the repositories.

pub mod assignment;
pub mod auth;
pub mod employee;
pub mod me;
pub mod org;
pub mod photo;
pub mod promotion;
pub mod reference;
pub mod report;

use std::sync::Arc;

pub use assignment::AssignmentService;
pub use auth::AuthService;
pub use employee::EmployeeService;
pub use me::MeService;
pub use org::OrgService;
pub use photo::PhotoService;
pub use promotion::PromotionService;
pub use reference::ReferenceService;
pub use report::ReportService;

use crate::auth::JwtService;
use crate::repository::{Repositories, RoleRepository};

/// All services, wired to one set of repositories
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub assignments: AssignmentService,
    pub promotions: PromotionService,
    pub employees: EmployeeService,
    pub me: MeService,
    pub photos: PhotoService,
    pub org: OrgService,
    pub references: ReferenceService,
    pub reports: ReportService,
    pub roles: Arc<dyn RoleRepository>,
}

impl Services {
    pub fn new(repos: &Repositories, jwt: Arc<JwtService>, default_photo_url: String) -> Self {
        let employees = EmployeeService::new(repos, default_photo_url);
        let photos = PhotoService::new(repos);
        Self {
            auth: AuthService::new(repos, jwt),
            assignments: AssignmentService::new(repos),
            promotions: PromotionService::new(repos),
            me: MeService::new(employees.clone(), photos.clone()),
            employees,
            photos,
            org: OrgService::new(repos),
            references: ReferenceService::new(repos),
            reports: ReportService::new(repos),
            roles: repos.roles.clone(),
        }
    }
}
