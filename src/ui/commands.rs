#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ScheduleClearMessage(u64), // delay in milliseconds
}
