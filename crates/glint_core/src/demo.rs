//! The stock demo scene: three spheres, a triangle spanning their centers
//! and a checkerboard floor, lit by a single light.

use glint_math::DVec3;

use crate::scene::{CameraDesc, MaterialDesc, PrimitiveDesc, SceneDescription};

/// Demo output width in pixels.
pub const DEMO_WIDTH: u32 = 400;

/// Demo output height in pixels.
pub const DEMO_HEIGHT: u32 = 400;

/// Build the demo scene description with default render settings.
pub fn demo_scene() -> SceneDescription {
    let red = DVec3::new(3.0, 3.0, -10.0);
    let green = DVec3::new(-2.0, 3.0, -10.0);
    let blue = DVec3::new(0.5, 7.0, -10.0);

    let camera = CameraDesc {
        eye: DVec3::new(1.0, 1.8, 10.0),
        up: DVec3::Y,
        look_at: DVec3::new(1.0, 3.0, 0.0),
        field_of_view: 45.0,
    };

    SceneDescription::new(DEMO_WIDTH, DEMO_HEIGHT, camera)
        .with_primitive(sphere(red, MaterialDesc::solid(DVec3::new(255.0, 0.0, 0.0))))
        .with_primitive(sphere(green, MaterialDesc::solid(DVec3::new(0.0, 255.0, 0.0))))
        .with_primitive(sphere(blue, MaterialDesc::solid(DVec3::new(0.0, 0.0, 255.0))))
        .with_primitive(PrimitiveDesc::Triangle {
            a: red,
            b: green,
            c: blue,
            material: MaterialDesc::solid(DVec3::new(255.0, 255.0, 0.0)),
        })
        .with_primitive(PrimitiveDesc::Plane {
            point: DVec3::ZERO,
            normal: DVec3::Y,
            material: MaterialDesc::checkerboard(),
        })
        .with_light(DVec3::new(30.0, 30.0, 10.0))
}

fn sphere(center: DVec3, material: MaterialDesc) -> PrimitiveDesc {
    PrimitiveDesc::Sphere {
        center,
        radius: 2.0,
        material,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_layout() {
        let scene = demo_scene();

        assert_eq!((scene.width, scene.height), (DEMO_WIDTH, DEMO_HEIGHT));
        let kinds: Vec<_> = scene.primitives.iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, ["sphere", "sphere", "sphere", "triangle", "plane"]);
        assert_eq!(scene.lights.len(), 1);
        assert!(scene.settings.validate().is_ok());
    }
}
