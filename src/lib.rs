use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, db, storage};

use domain::use_cases::jobs::JobBoard;
use domain::use_cases::provisioning::ProvisioningWorkflow;
use domain::use_cases::session::SessionManager;
use infrastructure::auth::jwt::JwtService;
use infrastructure::auth::provider::PasswordAuthProvider;
use infrastructure::storage::resume_store::FsResumeStore;
use interfaces::repositories::sqlx_repo::{
    SqlxApplicationRepo, SqlxEmployerRepo, SqlxIdentityRepo, SqlxJobRepo, SqlxJobSeekerRepo,
    SqlxProfileRepo,
};

pub type AppAuthProvider = PasswordAuthProvider<SqlxIdentityRepo>;

pub type AppSessionManager =
    SessionManager<AppAuthProvider, SqlxProfileRepo, SqlxJobSeekerRepo, SqlxEmployerRepo>;

pub type AppJobBoard =
    JobBoard<SqlxProfileRepo, SqlxJobSeekerRepo, SqlxEmployerRepo, SqlxJobRepo, SqlxApplicationRepo>;

pub struct AppState {
    pub session_manager: AppSessionManager,
    pub job_board: AppJobBoard,
    pub resume_store: FsResumeStore,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);
        let provider = Arc::new(PasswordAuthProvider::new(
            SqlxIdentityRepo::new(pool.clone()),
            jwt_service,
        ));

        let provisioning = ProvisioningWorkflow::new(
            SqlxProfileRepo::new(pool.clone()),
            SqlxJobSeekerRepo::new(pool.clone()),
            SqlxEmployerRepo::new(pool.clone()),
        );
        let session_manager = SessionManager::new(provider, provisioning);

        let job_board = JobBoard::new(
            SqlxProfileRepo::new(pool.clone()),
            SqlxJobSeekerRepo::new(pool.clone()),
            SqlxEmployerRepo::new(pool.clone()),
            SqlxJobRepo::new(pool.clone()),
            SqlxApplicationRepo::new(pool),
        );

        let resume_store = FsResumeStore::new(config);

        AppState {
            session_manager,
            job_board,
            resume_store,
        }
    }
}
