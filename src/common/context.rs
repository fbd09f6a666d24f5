use crate::repositories::messages::MessageStore;

pub trait Context: Sync + Send {
    fn messages(&self) -> &dyn MessageStore;
}
