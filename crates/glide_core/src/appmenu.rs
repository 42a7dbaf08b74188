//! Application menu address glue
//!
//! Clients that export their menu over D-Bus announce a service name and an
//! object path for each toplevel. The compositor does nothing with them other
//! than remembering them on the view so that a panel can look them up later.

use rustc_hash::FxHashMap;

/// Property key holding the D-Bus service name of a view's menu
pub const SERVICE_NAME_PROPERTY: &str = "kde-appmenu-service-name";

/// Property key holding the D-Bus object path of a view's menu
pub const OBJECT_PATH_PROPERTY: &str = "kde-appmenu-object-path";

/// String properties attached to a view
pub trait ViewProperties {
    fn set_property(&mut self, key: &str, value: String);
    fn erase_property(&mut self, key: &str);
    fn property(&self, key: &str) -> Option<&str>;
}

/// Plain in-memory property store
#[derive(Clone, Debug, Default)]
pub struct PropertyMap {
    values: FxHashMap<String, String>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ViewProperties for PropertyMap {
    fn set_property(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn erase_property(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn property(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Store a menu address on `view`.
///
/// Empty strings erase the corresponding property. When the surface has no
/// view attached the request is dropped.
pub fn set_address<V: ViewProperties + ?Sized>(
    view: Option<&mut V>,
    service_name: &str,
    object_path: &str,
) {
    let Some(view) = view else {
        tracing::error!("appmenu address set on a surface without a view");
        return;
    };

    store_or_erase(view, SERVICE_NAME_PROPERTY, service_name);
    store_or_erase(view, OBJECT_PATH_PROPERTY, object_path);
}

fn store_or_erase<V: ViewProperties + ?Sized>(view: &mut V, key: &str, value: &str) {
    if value.is_empty() {
        view.erase_property(key);
    } else {
        view.set_property(key, value.to_string());
    }
}
