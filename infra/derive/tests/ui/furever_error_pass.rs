use furever_derive::furever_error;
use std::borrow::Cow;

#[furever_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<Vec<u8>, DemoError> {
    std::fs::read("/definitely/not/here").context("Reading demo file")
}

fn main() {
    let _ = read();
    let _: DemoError = "boom".into();
}
