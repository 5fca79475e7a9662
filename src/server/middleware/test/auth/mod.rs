use strum::IntoEnumIterator;
use test_utils::{
    builder::TestBuilder,
    factory::user::{with_role, UserFactory},
};

use crate::{
    model::role::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        testing::{login_as, store, SUPER_ADMIN_ID},
    },
};

mod current_user;
mod require;
