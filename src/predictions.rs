use crate::context::AppContext;
use crate::models::Prediction;

pub async fn load_prediction(ctx: &AppContext) -> Option<Prediction> {
    let Some(user_id) = ctx.session.user_id() else {
        ctx.notifier.error("Please login");
        return None;
    };
    match ctx.api.predictions(user_id).await {
        Ok(prediction) => Some(prediction),
        Err(err) => {
            ctx.report(&err, "Prediction fetch failed");
            None
        }
    }
}

/// For the dashboard chart, where failures are only logged.
pub async fn load_forecast_quietly(ctx: &AppContext) -> Option<Prediction> {
    let user_id = ctx.session.user_id()?;
    match ctx.api.predictions(user_id).await {
        Ok(prediction) => Some(prediction),
        Err(err) => {
            log::error!("expense chart unavailable: {}", err);
            None
        }
    }
}
