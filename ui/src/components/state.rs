use crate::components::common::{ComponentId, Msg};
use crate::error::AppResult;
use tuirealm::{Application, Component, MockComponent, NoUserEvent, Sub};

/// Trait for managing component lifecycle and state
pub trait ComponentState {
    /// Initialize component and prepare it for use
    fn mount(&mut self) -> AppResult<()>;
}

/// Extension trait for our specific Application type to mount components with ComponentState automatically
pub trait ComponentStateMount {
    /// Mount a component that implements ComponentState, calling mount() automatically
    fn mount_with_state<C>(
        &mut self,
        id: ComponentId,
        component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static;

    /// Remount a component that implements ComponentState, calling mount() automatically.
    /// Mounts it fresh when `id` is not mounted yet.
    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static;
}

impl ComponentStateMount for Application<ComponentId, Msg, NoUserEvent> {
    fn mount_with_state<C>(
        &mut self,
        id: ComponentId,
        mut component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static,
    {
        component.mount()?;
        self.mount(id, Box::new(component), subs)?;
        Ok(())
    }

    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        mut component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static,
    {
        component.mount()?;
        if self.mounted(&id) {
            self.remount(id, Box::new(component), subs)?;
        } else {
            self.mount(id, Box::new(component), subs)?;
        }
        Ok(())
    }
}
