use termtree::Tree;
use tracing::instrument;

use crate::domain::{Bloodline, TreeResult, VampireId};

/// How a vampire is labelled when rendering a tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelStyle {
    pub show_years: bool,
    pub show_counts: bool,
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self, root: VampireId, style: LabelStyle) -> TreeResult<Tree<String>>;
}

impl TreeNodeConvert for Bloodline {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: VampireId, style: LabelStyle) -> TreeResult<Tree<String>> {
        fn label(bloodline: &Bloodline, idx: VampireId, style: LabelStyle) -> TreeResult<String> {
            let vampire = bloodline.vampire(idx)?;
            let mut label = if style.show_years {
                vampire.to_string()
            } else {
                vampire.name().to_string()
            };
            if style.show_counts {
                label.push_str(&format!(" [{}]", bloodline.count_descendants(idx)?));
            }
            Ok(label)
        }

        fn build_tree(
            bloodline: &Bloodline,
            idx: VampireId,
            style: LabelStyle,
            parent_tree: &mut Tree<String>,
        ) -> TreeResult<()> {
            for &child_idx in bloodline.offspring(idx)? {
                let mut child_tree = Tree::new(label(bloodline, child_idx, style)?);
                build_tree(bloodline, child_idx, style, &mut child_tree)?;
                parent_tree.push(child_tree);
            }
            Ok(())
        }

        let mut tree = Tree::new(label(self, root, style)?);
        build_tree(self, root, style, &mut tree)?;
        Ok(tree)
    }
}
