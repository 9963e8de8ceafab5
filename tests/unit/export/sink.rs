use super::*;
use crate::bake::bounds::Bounds;
use crate::foundation::core::TextureDims;

fn manifest(name: &str) -> BakeManifest {
    BakeManifest::new(
        name,
        TextureDims::new(2, 1),
        1,
        1.0,
        2.0,
        false,
        Bounds { min: 0.0, max: 1.0 },
    )
}

#[test]
fn in_memory_sink_keeps_exports_in_order() {
    let mut sink = InMemorySink::new();
    let grid = PixelGrid::new(TextureDims::new(2, 1));

    let a = sink.export(&grid, "a", &manifest("a")).unwrap();
    let b = sink.export(&grid, "b", &manifest("b")).unwrap();

    assert_eq!(a.as_str(), "memory://a");
    assert_eq!(b.as_str(), "memory://b");
    assert_eq!(sink.exported().len(), 2);
    assert_eq!(sink.last().unwrap().manifest.name, "b");
    assert_eq!(sink.last().unwrap().grid, grid);
}

#[test]
fn in_memory_sink_rejects_blank_name() {
    let mut sink = InMemorySink::new();
    let grid = PixelGrid::new(TextureDims::new(1, 1));
    let err = sink.export(&grid, "  ", &manifest("x")).unwrap_err();
    assert!(matches!(err, VatError::InvalidDestination(_)));
    assert!(sink.exported().is_empty());
}
