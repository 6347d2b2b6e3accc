use super::*;

/// Startup scene, read once when the editor is created.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Settings {
    pub vertices: [[f64; 3]; 3],
    pub camera_position: [f64; 3],
    pub coordinates: Barycentrics,
    pub interior_constraint: bool,
    pub balancing_mode: BalancingMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vertices: [[0.0, 20.0, 0.0], [-20.0, -10.0, 0.0], [20.0, -10.0, 0.0]],
            camera_position: [0.0, 0.0, 50.0],
            coordinates: Barycentrics::INITIAL,
            interior_constraint: true,
            balancing_mode: BalancingMode::default(),
        }
    }
}

impl Settings {
    pub fn vertices(&self) -> [Point3; 3] {
        self.vertices.map(Point3::from)
    }

    pub fn camera_position(&self) -> Point3 {
        Point3::from(self.camera_position)
    }

    pub fn validate(&self) -> Result<()> {
        let finite = self
            .vertices
            .iter()
            .chain(std::iter::once(&self.camera_position))
            .flatten()
            .all(|value| value.is_finite());
        ensure!(finite, "Settings contain non-finite positions");
        ensure!(
            self.coordinates.is_finite(),
            "Settings contain non-finite coordinates: {}",
            self.coordinates
        );
        if Triangle::from(self.vertices()).is_degenerate() {
            warn!("Configured triangle is degenerate");
        }
        Ok(())
    }

    /// Defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let settings = File::open(path)
            .map_err(anyhow::Error::from)
            .and_then(|file| Self::from_reader(BufReader::new(file)))
            .with_context(|| format!("Reading settings: {}", path.display()))?;
        settings.validate()?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Creating settings: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(ron::de::from_reader(reader)?)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let pretty = ron::ser::PrettyConfig::default().struct_names(true);
        ron::ser::to_writer_pretty(writer, self, pretty)?;
        Ok(())
    }
}
