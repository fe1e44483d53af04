use common::batch::BatchOutput;

pub enum Msg {
    UpdateUsername(String),
    UpdatePassword(String),
    Login,
    SignOut,
    SetDragActive(bool),
    OpenFileDialog,
    FileSelected(web_sys::File),
    /// `run` tags messages with the upload they belong to.
    Progress { run: u32, done: usize, total: usize },
    BatchFinished { run: u32, result: Result<BatchOutput, String> },
}
