use moon::*;

async fn frontend() -> Frontend {
    Frontend::new().title("Checklist")
}

// The app keeps all state in the browser, there are no messages to handle.
async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_| {}).await
}
