use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxIdentityRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProfileRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxJobSeekerRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxEmployerRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxJobRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxApplicationRepo {
    pub pool: PgPool,
}
