use std::cell::RefCell;
use std::rc::Rc;

use egui::{Color32, Pos2, Rect};

use crate::apps::DeckItem;
use crate::config::DeviceProfile;
use crate::drag::{DragListener, DragPreview, DropTarget};

use super::{HandleView, HostRequests};

/// Drop target that opens an application's details screen.
///
/// The icon only shows itself while an application is being dragged.
/// Dropping on it asks the host to open that application's details screen
/// and then rejects the drop on purpose: rejecting keeps the dragged icon on
/// the deck, and the details request is the actual outcome of the gesture.
pub struct InfoDropTarget {
    active: bool,
    /// When false this instance neither reacts to drags nor manages its own
    /// visibility; the embedding bar owns both.
    drag_and_drop_enabled: bool,
    visible: bool,
    tint: Color32,
    profile: DeviceProfile,
    handle: Option<Rc<RefCell<HandleView>>>,
    host: Option<Rc<RefCell<HostRequests>>>,
}

impl InfoDropTarget {
    /// Create a hidden, inactive target for the given device profile.
    pub fn new(profile: DeviceProfile) -> Self {
        Self {
            active: false,
            drag_and_drop_enabled: true,
            visible: false,
            tint: Color32::from_rgba_unmultiplied(96, 176, 255, 110),
            profile,
            handle: None,
            host: None,
        }
    }

    /// Color overlaid on the dragged preview while it hovers here.
    pub fn set_drag_tint(&mut self, tint: Color32) {
        self.tint = tint;
    }

    /// Wire the host that receives the open-details request.
    pub fn bind_host(&mut self, host: Rc<RefCell<HostRequests>>) {
        self.host = Some(host);
    }

    /// Wire the handle view this target appears in the place of.
    pub fn bind_handle(&mut self, handle: Rc<RefCell<HandleView>>) {
        self.handle = Some(handle);
    }

    /// Enable or disable drag handling for this instance.
    pub fn set_drag_and_drop_enabled(&mut self, enabled: bool) {
        self.drag_and_drop_enabled = enabled;
    }

    /// Swap in the device profile loaded from configuration.
    pub fn set_device_profile(&mut self, profile: DeviceProfile) {
        self.profile = profile;
    }

    /// Whether the action bar should draw the info icon this frame.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_handle_visible(&self, visible: bool) {
        if let Some(handle) = &self.handle {
            handle.borrow_mut().set_visible(visible);
        }
    }
}

impl DropTarget for InfoDropTarget {
    // The details request is issued here rather than in `on_drop`: doing the
    // work before the accept decision lets the target reject the drop, so
    // the dragged icon is never consumed from its origin slot.
    fn accept_drop(&mut self, item: &DeckItem, _pos: Pos2) -> bool {
        if !self.visible {
            return false;
        }
        let component = match item {
            DeckItem::App(app) => Some(&app.component),
            DeckItem::Shortcut(shortcut) => shortcut.intent.component(),
            DeckItem::Group(_) => None,
        };
        if let Some(host) = &self.host {
            host.borrow_mut().open_application_details(component);
        }
        false
    }

    fn on_drop(&mut self, _item: &DeckItem, _pos: Pos2) {}

    fn on_drag_enter(&mut self, _item: &DeckItem, preview: &mut DragPreview) {
        if !self.drag_and_drop_enabled {
            return;
        }
        preview.set_tint(Some(self.tint));
    }

    fn on_drag_over(&mut self, _item: &DeckItem, _pos: Pos2) {}

    fn on_drag_exit(&mut self, _item: &DeckItem, preview: &mut DragPreview) {
        if !self.drag_and_drop_enabled {
            return;
        }
        preview.set_tint(None);
    }

    fn is_drop_enabled(&self) -> bool {
        self.active
    }

    fn hit_rect(&self, bounds: Rect) -> Rect {
        let mut rect = bounds;
        if self.profile.screen.is_extra_large() {
            // The left edge grows less so the region stays clear of the
            // neighboring bar items.
            rect.min.y -= self.profile.outer_hit_padding;
            rect.min.x -= self.profile.inner_hit_padding;
            rect.max.y += self.profile.outer_hit_padding;
            rect.max.x += self.profile.outer_hit_padding;
        }
        rect
    }
}

impl DragListener for InfoDropTarget {
    fn on_drag_start(&mut self, item: &DeckItem) {
        if !self.drag_and_drop_enabled {
            return;
        }
        self.active = matches!(item, DeckItem::App(_));
        // Only surface the icon when an application is being dragged.
        if self.active {
            self.visible = true;
        }
        self.set_handle_visible(false);
    }

    fn on_drag_end(&mut self) {
        if !self.drag_and_drop_enabled {
            return;
        }
        if self.active {
            self.active = false;
        }
        self.visible = false;
        self.set_handle_visible(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::{AppInfo, ComponentName, GroupInfo, Intent, ShortcutInfo};
    use crate::config::ScreenClass;
    use crate::drop_targets::HostRequest;
    use egui::{pos2, vec2};

    fn wired_target() -> (
        InfoDropTarget,
        Rc<RefCell<HostRequests>>,
        Rc<RefCell<HandleView>>,
    ) {
        let host = Rc::new(RefCell::new(HostRequests::default()));
        let handle = Rc::new(RefCell::new(HandleView::default()));
        let mut target = InfoDropTarget::new(DeviceProfile::default());
        target.bind_host(Rc::clone(&host));
        target.bind_handle(Rc::clone(&handle));
        (target, host, handle)
    }

    fn app_item() -> DeckItem {
        DeckItem::App(AppInfo {
            title: "Browser".into(),
            component: ComponentName::new("org.example.browser", "MainActivity"),
        })
    }

    fn shortcut_item(component: Option<ComponentName>) -> DeckItem {
        let mut intent = Intent::for_action("org.example.mail.COMPOSE");
        if let Some(component) = component {
            intent = intent.with_component(component);
        }
        DeckItem::Shortcut(ShortcutInfo {
            title: "Compose".into(),
            intent,
        })
    }

    fn group_item() -> DeckItem {
        DeckItem::Group(GroupInfo {
            title: "Games".into(),
            members: vec!["Chess".into(), "Go".into()],
        })
    }

    fn drop_pos() -> Pos2 {
        pos2(10.0, 10.0)
    }

    #[test]
    fn app_drag_activates_and_shows_the_target() {
        let (mut target, _host, handle) = wired_target();
        target.on_drag_start(&app_item());
        assert!(target.is_drop_enabled());
        assert!(target.is_visible());
        assert!(!handle.borrow().is_visible());
    }

    #[test]
    fn non_app_drags_leave_the_target_inactive() {
        let (mut target, _host, handle) = wired_target();
        target.on_drag_start(&shortcut_item(None));
        assert!(!target.is_drop_enabled());
        assert!(!target.is_visible());
        // The handle still yields its slot for the duration of the drag.
        assert!(!handle.borrow().is_visible());

        target.on_drag_start(&group_item());
        assert!(!target.is_drop_enabled());
        assert!(!target.is_visible());
    }

    #[test]
    fn drop_is_always_rejected() {
        let (mut target, _host, _handle) = wired_target();
        assert!(!target.accept_drop(&app_item(), drop_pos()));

        target.on_drag_start(&app_item());
        assert!(!target.accept_drop(&app_item(), drop_pos()));
        assert!(!target.accept_drop(&shortcut_item(None), drop_pos()));
        assert!(!target.accept_drop(&group_item(), drop_pos()));
    }

    #[test]
    fn visible_target_requests_details_exactly_once_per_drop() {
        let (mut target, host, _handle) = wired_target();
        target.on_drag_start(&app_item());
        target.accept_drop(&app_item(), drop_pos());

        let request = host.borrow_mut().pop();
        let expected = ComponentName::new("org.example.browser", "MainActivity");
        assert_eq!(request, Some(HostRequest::OpenDetails(Some(expected))));
        assert!(host.borrow().is_empty());
    }

    #[test]
    fn hidden_target_never_reaches_the_host() {
        let (mut target, host, _handle) = wired_target();
        target.accept_drop(&app_item(), drop_pos());
        assert!(host.borrow().is_empty());
    }

    #[test]
    fn shortcut_drop_resolves_the_intent_component() {
        let (mut target, host, _handle) = wired_target();
        let component = ComponentName::new("org.example.mail", "ComposeActivity");
        target.on_drag_start(&app_item());
        target.accept_drop(&shortcut_item(Some(component.clone())), drop_pos());
        assert_eq!(
            host.borrow_mut().pop(),
            Some(HostRequest::OpenDetails(Some(component)))
        );
    }

    #[test]
    fn unresolvable_drops_still_reach_the_host() {
        let (mut target, host, _handle) = wired_target();
        target.on_drag_start(&app_item());
        target.accept_drop(&group_item(), drop_pos());
        assert_eq!(host.borrow_mut().pop(), Some(HostRequest::OpenDetails(None)));
    }

    #[test]
    fn drag_end_clears_the_target_and_restores_the_handle() {
        let (mut target, _host, handle) = wired_target();
        target.on_drag_start(&app_item());
        target.on_drag_end();
        assert!(!target.is_drop_enabled());
        assert!(!target.is_visible());
        assert!(handle.borrow().is_visible());
    }

    #[test]
    fn disabled_instance_ignores_the_drag_lifecycle() {
        let (mut target, _host, handle) = wired_target();
        target.set_drag_and_drop_enabled(false);
        let mut preview = DragPreview::new("🌐", "Browser", Color32::WHITE);

        target.on_drag_start(&app_item());
        assert!(!target.is_drop_enabled());
        assert!(!target.is_visible());
        assert!(handle.borrow().is_visible());

        target.on_drag_enter(&app_item(), &mut preview);
        assert_eq!(preview.tint(), None);

        preview.set_tint(Some(Color32::RED));
        target.on_drag_exit(&app_item(), &mut preview);
        assert_eq!(preview.tint(), Some(Color32::RED));

        target.on_drag_end();
        assert!(handle.borrow().is_visible());
    }

    #[test]
    fn enter_and_exit_toggle_the_preview_tint() {
        let (mut target, _host, _handle) = wired_target();
        let tint = Color32::from_rgba_unmultiplied(10, 20, 30, 40);
        target.set_drag_tint(tint);
        let mut preview = DragPreview::new("🌐", "Browser", Color32::WHITE);

        target.on_drag_enter(&app_item(), &mut preview);
        assert_eq!(preview.tint(), Some(tint));
        target.on_drag_exit(&app_item(), &mut preview);
        assert_eq!(preview.tint(), None);
    }

    #[test]
    fn hit_rect_is_untouched_below_extra_large() {
        let bounds = Rect::from_min_size(pos2(200.0, 12.0), vec2(30.0, 24.0));
        for screen in [ScreenClass::Compact, ScreenClass::Large] {
            let target = InfoDropTarget::new(DeviceProfile {
                screen,
                outer_hit_padding: 24.0,
                inner_hit_padding: 12.0,
            });
            assert_eq!(target.hit_rect(bounds), bounds);
        }
    }

    #[test]
    fn hit_rect_expands_asymmetrically_on_extra_large() {
        let bounds = Rect::from_min_size(pos2(200.0, 12.0), vec2(30.0, 24.0));
        let target = InfoDropTarget::new(DeviceProfile {
            screen: ScreenClass::ExtraLarge,
            outer_hit_padding: 24.0,
            inner_hit_padding: 12.0,
        });
        let expanded = target.hit_rect(bounds);
        assert_eq!(expanded.min.x, bounds.min.x - 12.0);
        assert_eq!(expanded.min.y, bounds.min.y - 24.0);
        assert_eq!(expanded.max.x, bounds.max.x + 24.0);
        assert_eq!(expanded.max.y, bounds.max.y + 24.0);
    }
}
