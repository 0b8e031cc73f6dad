use crate::checkout::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest, BorrowBookCommandResponse};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, OperatorError};

fn build_service(state: &AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.catalog, state.via)
}

pub async fn borrow_book(state: &AppState, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, OperatorError> {
    let res = BorrowBookCommand::new(build_service(state)).execute(req).await?;
    Ok(res)
}

pub async fn return_book(state: &AppState, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, OperatorError> {
    let res = ReturnBookCommand::new(build_service(state)).execute(req).await?;
    Ok(res)
}
