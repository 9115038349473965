use common::model::record::Record;

use super::editor::Field;

#[derive(Clone)]
pub enum Msg {
    /// Re-fetch the whole collection and replace the local snapshot.
    Refresh,
    Loaded(Vec<Record>),
    RefreshFailed(String),

    /// Open the create form with an empty draft.
    StartCreate,
    /// Open the edit modal pre-filled from the clicked record.
    StartEdit(Record),
    /// Update one staged field of the draft.
    Stage(Field, String),

    SubmitCreate,
    SubmitUpdate,
    Delete,
    /// Close the active surface, discarding the draft.
    Close,

    CreateSucceeded,
    UpdateSucceeded,
    DeleteSucceeded,
    /// A create/update/delete failed; the draft stays open with this message.
    MutationFailed(String),

    /// One-shot dismissal of the create success notice.
    DismissNotice,
}
