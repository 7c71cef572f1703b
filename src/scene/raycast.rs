//! Ray and bounding-volume intersection for picking.

use glam::Vec3;

use super::NodeId;

/// Half-line from `origin` along a unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction (zero for a degenerate ray).
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// World-space bounding volume used for hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    /// Sphere.
    Sphere {
        /// Centre.
        center: Vec3,
        /// Radius.
        radius: f32,
    },
    /// Axis-aligned box.
    Aabb {
        /// Minimum corner.
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
}

impl Bounds {
    /// Sphere bounds.
    #[must_use]
    pub const fn sphere(center: Vec3, radius: f32) -> Self {
        Self::Sphere { center, radius }
    }

    /// Box bounds centred on `center` with full extents `size`.
    #[must_use]
    pub fn cuboid(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self::Aabb {
            min: center - half,
            max: center + half,
        }
    }

    /// Whether `point` lies inside or on the volume.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        match *self {
            Self::Sphere { center, radius } => {
                point.distance_squared(center) <= radius * radius
            }
            Self::Aabb { min, max } => {
                point.cmpge(min).all() && point.cmple(max).all()
            }
        }
    }

    /// Distance along `ray` to the first surface crossing in front of the
    /// origin. A ray starting inside reports the exit point.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        if ray.direction == Vec3::ZERO {
            return None;
        }
        match *self {
            Self::Sphere { center, radius } => {
                intersect_sphere(ray, center, radius)
            }
            Self::Aabb { min, max } => intersect_aabb(ray, min, max),
        }
    }
}

fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    let far = -b + sqrt_d;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

fn intersect_aabb(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray.direction.recip();
    let t1 = (min - ray.origin) * inv;
    let t2 = (max - ray.origin) * inv;
    let t_near = t1.min(t2).max_element();
    let t_far = t1.max(t2).min_element();
    if t_far < 0.0 || t_near > t_far {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// One ray/node intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Node whose bounds were hit.
    pub node: NodeId,
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(ray.direction, Vec3::NEG_Z);
        assert_eq!(ray.at(2.0), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn sphere_hit_reports_near_surface() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let sphere = Bounds::sphere(Vec3::ZERO, 1.0);
        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
        assert!(sphere.contains(ray.at(t + 0.5)));
    }

    #[test]
    fn sphere_miss_and_behind() {
        let sphere = Bounds::sphere(Vec3::ZERO, 1.0);
        let beside = Ray::new(Vec3::new(3.0, 0.0, 10.0), Vec3::NEG_Z);
        assert_eq!(sphere.intersect(&beside), None);
        let away = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert_eq!(sphere.intersect(&away), None);
    }

    #[test]
    fn ray_from_inside_sphere_hits_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = Bounds::sphere(Vec3::ZERO, 2.0).intersect(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn box_hit_and_miss() {
        let cube = Bounds::cuboid(Vec3::new(0.0, 0.0, -5.0), Vec3::splat(2.0));
        let hit = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.1, -1.0));
        let t = cube.intersect(&hit).unwrap();
        assert!(cube.contains(hit.at(t + 1e-3)));
        let miss = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, -1.0));
        assert_eq!(cube.intersect(&miss), None);
    }

    #[test]
    fn degenerate_ray_hits_nothing() {
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert_eq!(Bounds::sphere(Vec3::ZERO, 5.0).intersect(&ray), None);
    }
}
