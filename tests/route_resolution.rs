//! Navigation behavior of the canonical route table.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use admin_console::routing::{console_routes, Route, RouteTable, ViewHandle, ViewLoader};

#[tokio::test]
async fn every_canonical_path_resolves_to_its_declared_view() {
    let table = console_routes().unwrap();

    let expected = [
        ("/", "home", "views/Home"),
        ("/login", "login", "views/Login"),
        ("/register", "register", "views/Register"),
        ("/home", "home-alias", "views/Home"),
        ("/admin", "admin", "views/admin/Admin"),
        ("/admin/system/analysis", "system-analysis", "views/admin/SystemAnalysis"),
        ("/admin/system/role", "system-role", "views/admin/SystemRole"),
        ("/admin/user/insert", "user-insert", "views/admin/UserInsert"),
        ("/admin/user/update", "user-update", "views/admin/UserUpdate"),
        ("/admin/device/upload", "device-upload", "views/admin/DataUpload"),
        ("/admin/model/train", "model-train", "views/admin/ModelTrain"),
        ("/admin/model/predict", "model-predict", "views/admin/ModelPredict"),
        ("/admin/model/advice", "model-advice", "views/admin/ModelAdvice"),
        ("/admin/equip/order", "equip-order", "views/admin/EquipOrder"),
        ("/admin/equip/process", "equip-process", "views/admin/EquipProcess"),
        ("/admin/equip/list", "equip-list", "views/admin/EquipList"),
    ];

    for (path, name, module) in expected {
        let resolution = table
            .resolve(path)
            .unwrap_or_else(|| panic!("`{path}` did not resolve"));
        assert_eq!(resolution.leaf().name, name, "wrong route for `{path}`");

        let views = resolution.load_views().await.unwrap();
        assert_eq!(
            views.last().map(|v| v.module.as_str()),
            Some(module),
            "wrong view for `{path}`"
        );
    }
}

#[test]
fn admin_pages_resolve_only_under_the_admin_prefix() {
    let table = console_routes().unwrap();

    for path in [
        "/system/analysis",
        "/user/insert",
        "/model/train",
        "/equip/list",
    ] {
        assert!(table.resolve(path).is_none(), "`{path}` should not resolve");
    }
}

#[test]
fn unknown_paths_do_not_resolve() {
    let table = console_routes().unwrap();

    assert!(table.resolve("/logout").is_none());
    assert!(table.resolve("/admin/system/unknown").is_none());
    assert!(table.resolve("/admin/model/train/extra").is_none());
}

#[tokio::test]
async fn nested_navigation_mounts_the_admin_layout_first() {
    let table = console_routes().unwrap();

    let resolution = table.resolve("/admin/equip/order").unwrap();
    let modules: Vec<_> = resolution
        .load_views()
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.module)
        .collect();

    assert_eq!(modules, vec!["views/admin/Admin", "views/admin/EquipOrder"]);
}

fn counting_loader(module: &'static str, counter: Arc<AtomicUsize>) -> ViewLoader {
    ViewLoader::new(move || {
        let counter = counter.clone();
        Box::pin(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(ViewHandle {
                module: module.to_string(),
            })
        })
    })
}

#[tokio::test]
async fn loaders_run_only_on_navigation() {
    let parent_loads = Arc::new(AtomicUsize::new(0));
    let child_loads = Arc::new(AtomicUsize::new(0));

    let table = RouteTable::builder()
        .route(
            Route::new(
                "/admin",
                "admin",
                counting_loader("views/admin/Admin", parent_loads.clone()),
            )
            .with_children(vec![Route::new(
                "model/train",
                "model-train",
                counting_loader("views/admin/ModelTrain", child_loads.clone()),
            )]),
        )
        .build()
        .unwrap();

    // construction and resolution alone never invoke a loader
    let resolution = table.resolve("/admin/model/train").unwrap();
    assert_eq!(parent_loads.load(Ordering::SeqCst), 0);
    assert_eq!(child_loads.load(Ordering::SeqCst), 0);

    resolution.load_views().await.unwrap();
    assert_eq!(parent_loads.load(Ordering::SeqCst), 1);
    assert_eq!(child_loads.load(Ordering::SeqCst), 1);

    // a second navigation loads again; the shell does not cache views
    table
        .resolve("/admin/model/train")
        .unwrap()
        .load_views()
        .await
        .unwrap();
    assert_eq!(parent_loads.load(Ordering::SeqCst), 2);
    assert_eq!(child_loads.load(Ordering::SeqCst), 2);
}
