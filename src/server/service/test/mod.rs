use test_utils::{
    builder::TestBuilder,
    factory::user::{with_role, UserFactory},
};

use crate::{
    model::role::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::user::RoleChangeParam,
        testing::{actor, store},
    },
};

mod communique;
mod user;
