//! Request validation chains

use kernel::validation::ValidatorChain;
use kernel::validation::rules::{EmailValidator, PasswordValidator, UsernameValidator};

/// username → password
pub fn login_chain() -> ValidatorChain {
    ValidatorChain::new()
        .set_next(UsernameValidator)
        .set_next(PasswordValidator)
}

/// username → password → email
pub fn sign_up_chain() -> ValidatorChain {
    ValidatorChain::new()
        .set_next(UsernameValidator)
        .set_next(PasswordValidator)
        .set_next(EmailValidator)
}
