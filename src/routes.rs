use crate::{
    api::{advance, expense, income, outstanding_customer, salary},
    config::Config,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/income")
                    // /income
                    .service(
                        web::resource("")
                            .route(web::get().to(income::list_income))
                            .route(web::post().to(income::create_income)),
                    )
                    // /income/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(income::update_income))
                            .route(web::delete().to(income::delete_income)),
                    ),
            )
            .service(
                web::scope("/expenses")
                    .service(
                        web::resource("")
                            .route(web::get().to(expense::list_expenses))
                            .route(web::post().to(expense::create_expense)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(expense::update_expense))
                            .route(web::delete().to(expense::delete_expense)),
                    ),
            )
            .service(
                web::scope("/advances")
                    .service(
                        web::resource("")
                            .route(web::get().to(advance::list_advances))
                            .route(web::post().to(advance::create_advance)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(advance::update_advance))
                            .route(web::delete().to(advance::delete_advance)),
                    ),
            )
            .service(
                web::scope("/outstandingCustomers")
                    .service(
                        web::resource("")
                            .route(web::get().to(outstanding_customer::list_outstanding_customers))
                            .route(web::post().to(outstanding_customer::create_outstanding_customer)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(outstanding_customer::update_outstanding_customer))
                            .route(web::delete().to(outstanding_customer::delete_outstanding_customer)),
                    ),
            )
            .service(
                web::scope("/fieldWorkerSalaries")
                    // whole document
                    .service(
                        web::resource("")
                            .route(web::get().to(salary::get_book))
                            .route(web::put().to(salary::replace_book)),
                    )
                    // one month
                    .service(
                        web::resource("/{year}/{month}")
                            .route(web::get().to(salary::get_table))
                            .route(web::put().to(salary::save_table)),
                    )
                    .service(
                        web::resource("/{year}/{month}/workers")
                            .route(web::post().to(salary::add_worker)),
                    )
                    .service(
                        web::resource("/{year}/{month}/cell")
                            .route(web::put().to(salary::set_cell)),
                    )
                    .service(
                        web::resource("/{year}/{month}/totals")
                            .route(web::get().to(salary::totals)),
                    ),
            ),
    );
}
