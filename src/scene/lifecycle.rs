/// Proof that work was started during a particular mount
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountToken {
    epoch: u64,
}

/// Mounted flag plus an epoch that advances on every mount and unmount
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountState {
    mounted: bool,
    epoch: u64,
}

impl MountState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns false if already mounted
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.epoch += 1;
        true
    }

    /// Returns false if not mounted
    pub fn unmount(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.mounted = false;
        self.epoch += 1;
        true
    }

    pub fn token(&self) -> MountToken {
        MountToken { epoch: self.epoch }
    }

    /// A token is live only while the mount it was taken in is still current
    pub fn is_live(&self, token: MountToken) -> bool {
        self.mounted && token.epoch == self.epoch
    }
}
