//! App Router

use salvo::Router;

use crate::medications;

pub(crate) fn app_router() -> Router {
    Router::with_path("medications")
        .get(medications::index::handler)
        .post(medications::create::handler)
        .push(Router::with_path("name/{name}").get(medications::find::by_name))
        .push(
            Router::with_path("active-ingredient/{active_ingredient}")
                .get(medications::find::by_active_ingredient),
        )
}
