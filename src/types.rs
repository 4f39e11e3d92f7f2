/// Maximum point lights the mesh shader accumulates
pub const MAX_POINT_LIGHTS: usize = 4;

/// Lit mesh vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Unlit colored line vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl LineVertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Per-frame data shared by every pipeline (bind group 0)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalsUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Billboard axes for snow sprites
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
    /// Linear ambient color, w unused
    pub ambient: [f32; 4],
    /// World positions, w unused
    pub light_positions: [[f32; 4]; MAX_POINT_LIGHTS],
    /// Linear colors, w unused
    pub light_colors: [[f32; 4]; MAX_POINT_LIGHTS],
    pub light_count: u32,
    pub _pad: [u32; 3],
}

/// Per-object data (bind group 1)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    /// Linear material color, w = opacity
    pub color: [f32; 4],
    /// x = sprite size in world units, rest unused
    pub params: [f32; 4],
}
