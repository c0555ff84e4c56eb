/// Metallic-roughness surface material.
///
/// One template is built by the factory; every instance owns a clone so that
/// per-instance appearance can diverge later without touching the template.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterial {
    /// Linear-space base color (albedo).
    pub base_color: [f32; 3],

    /// 0.0 = mirror smooth, 1.0 = fully rough.
    pub roughness: f32,

    /// 0.0 = dielectric, 1.0 = metal.
    pub metalness: f32,
}

impl StandardMaterial {
    /// The field's template material.
    pub fn template() -> Self {
        Self {
            base_color: [0.133, 0.8, 0.533],
            roughness: 0.4,
            metalness: 0.1,
        }
    }
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self::template()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_clones_are_independent() {
        let template = StandardMaterial::template();
        let mut clone = template.clone();
        clone.base_color = [1.0, 0.0, 0.0];
        assert_ne!(clone, template);
        assert_eq!(template, StandardMaterial::template());
    }
}
