pub(crate) mod deep_research_toggle;
pub(crate) mod message_node;
pub(crate) mod thread_composer;
pub(crate) mod thread_list;
pub(crate) mod thread_view;

pub use deep_research_toggle::DeepResearchToggle;
pub use thread_composer::ThreadComposer;
pub use thread_list::ThreadList;
pub use thread_view::ThreadView;
