use std::fmt;

/**
 * A `Block` is a single building block of a wall.
 *
 * Leaves are plain bricks. Composites carry their own color and material but
 * primarily act as containers owning an ordered list of child blocks, which may
 * be composites again. Children are owned exclusively, so a block can never
 * end up as its own descendant.
 */
pub enum Block {
    Leaf {
        color: String,
        material: String,
    },
    Composite {
        color: String,
        material: String,
        children: Vec<Block>,
    },
}

impl Block {
    pub fn leaf(color: impl Into<String>, material: impl Into<String>) -> Self {
        Self::Leaf {
            color: color.into(),
            material: material.into(),
        }
    }

    pub fn composite(
        color: impl Into<String>,
        material: impl Into<String>,
        children: Vec<Block>,
    ) -> Self {
        Self::Composite {
            color: color.into(),
            material: material.into(),
            children,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Self::Leaf { color, .. } | Self::Composite { color, .. } => color,
        }
    }

    pub fn material(&self) -> &str {
        match self {
            Self::Leaf { material, .. } | Self::Composite { material, .. } => material,
        }
    }

    /// Direct children in insertion order. Leaves have none.
    pub fn children(&self) -> &[Block] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Composite { children, .. } => children,
        }
    }

    /// A copy of this block's own attributes around `children`. Leaves ignore `children`.
    fn with_children(&self, children: Vec<Block>) -> Self {
        match self {
            Self::Leaf { color, material } => Self::leaf(color.clone(), material.clone()),
            Self::Composite { color, material, .. } => Self::composite(color.clone(), material.clone(), children),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite { .. })
    }

    /**
     * Appends `child` after the existing children of a composite.
     *
     * Leaves cannot hold children; the call is rejected and the leaf stays as it is.
     */
    pub fn add_child(&mut self, child: Block) -> anyhow::Result<()> {
        match self {
            Self::Composite { children, .. } => {
                children.push(child);
                Ok(())
            }
            Self::Leaf { color, material } => {
                log::warn!(
                    "You tried to add a child to leaf block {}/{}, only composites hold children.",
                    color,
                    material
                );
                anyhow::bail!("block {}/{} is a leaf and cannot hold children", color, material)
            }
        }
    }
}

// Composites are torn down with a work list; dropping a deep wall must not recurse.
impl Drop for Block {
    fn drop(&mut self) {
        let Self::Composite { children, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut block) = pending.pop() {
            if let Self::Composite { children, .. } = &mut block {
                pending.append(children);
            }
        }
    }
}

struct CloneFrame<'a> {
    source: &'a Block,
    pending: std::slice::Iter<'a, Block>,
    done: Vec<Block>,
}

impl<'a> CloneFrame<'a> {
    fn new(source: &'a Block) -> Self {
        Self {
            source,
            pending: source.children().iter(),
            done: Vec::with_capacity(source.children().len()),
        }
    }
}

// Clone and PartialEq walk with explicit stacks, same as Drop.
impl Clone for Block {
    fn clone(&self) -> Self {
        let mut parents: Vec<CloneFrame<'_>> = Vec::new();
        let mut current = CloneFrame::new(self);
        loop {
            match current.pending.next() {
                Some(child) if child.is_composite() => {
                    parents.push(std::mem::replace(&mut current, CloneFrame::new(child)));
                }
                Some(leaf) => current.done.push(leaf.with_children(Vec::new())),
                None => {
                    let block = current.source.with_children(current.done);
                    match parents.pop() {
                        Some(parent) => {
                            current = parent;
                            current.done.push(block);
                        }
                        None => return block,
                    }
                }
            }
        }
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.is_composite() != right.is_composite()
                || left.color() != right.color()
                || left.material() != right.material()
                || left.children().len() != right.children().len()
            {
                return false;
            }
            pending.extend(left.children().iter().zip(right.children()));
        }
        true
    }
}

impl Eq for Block {}

/// Shallow: composites report how many children they hold, not the children themselves.
impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf { color, material } => f
                .debug_struct("Leaf")
                .field("color", color)
                .field("material", material)
                .finish(),
            Self::Composite {
                color,
                material,
                children,
            } => f
                .debug_struct("Composite")
                .field("color", color)
                .field("material", material)
                .field("children", &children.len())
                .finish(),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf { color, material } => write!(f, "{}/{}", color, material),
            Self::Composite {
                color,
                material,
                children,
            } => match children.len() {
                1 => write!(f, "{}/{} [1 child]", color, material),
                n => write!(f, "{}/{} [{} children]", color, material, n),
            },
        }
    }
}
