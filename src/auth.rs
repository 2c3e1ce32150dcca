use crate::context::AppContext;
use crate::error::ValidationError;
use crate::models::{LoginRequest, SignupRequest};
use crate::nav::{PageId, Redirect};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = self.email.trim();
        let password = self.password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let password = self.password.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ValidationError::IncompleteSignup);
        }
        if password != self.confirm.trim() {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// Returns where to go next on success; failures only notify.
pub async fn login(ctx: &AppContext, form: &LoginForm) -> Option<Redirect> {
    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            ctx.notifier.error(err.to_string());
            return None;
        }
    };

    match ctx.api.login(&request).await {
        Ok(user) => {
            log::info!("signed in as user {}", user.id);
            ctx.session.set(&user);
            ctx.notifier.success("Login successful");
            Some(Redirect {
                to: PageId::Dashboard,
                after_ms: ctx.config.login_redirect_ms,
            })
        }
        Err(err) => {
            ctx.report(&err, "Login failed");
            None
        }
    }
}

pub async fn signup(ctx: &AppContext, form: &SignupForm) -> Option<Redirect> {
    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            ctx.notifier.error(err.to_string());
            return None;
        }
    };

    match ctx.api.signup(&request).await {
        Ok(_) => {
            ctx.notifier.success("Account created, please login");
            Some(Redirect {
                to: PageId::Login,
                after_ms: ctx.config.signup_redirect_ms,
            })
        }
        Err(err) => {
            ctx.report(&err, "Signup failed");
            None
        }
    }
}

pub fn logout(ctx: &AppContext) -> Redirect {
    ctx.session.clear();
    ctx.notifier.info("Logged out");
    Redirect {
        to: PageId::Login,
        after_ms: ctx.config.logout_redirect_ms,
    }
}

/// Placeholder flow: acknowledges the address, sends nothing.
pub fn reset_password(ctx: &AppContext, email: &str) -> bool {
    if email.trim().is_empty() {
        ctx.notifier
            .error(ValidationError::MissingResetEmail.to_string());
        return false;
    }
    ctx.notifier
        .info_for("Password reset link (demo only, no email is sent yet)", 3500);
    true
}
