#[derive(Debug, Clone, PartialEq)]
pub struct WindowProperties {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub vsync: bool,
}

pub struct WindowBuilder {
    properties: WindowProperties,
}

impl Default for WindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowBuilder {
    pub fn new() -> Self {
        WindowBuilder {
            properties: WindowProperties {
                title: "hello_gl".to_owned(),
                width: 800,
                height: 600,
                vsync: true,
            },
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.properties.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.properties.height = height;
        self
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.properties.title = title;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.properties.vsync = vsync;
        self
    }

    pub fn build(self) -> WindowProperties {
        self.properties
    }
}
