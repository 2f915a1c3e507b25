use super::*;
use arrayvec::ArrayVec;

const REFERENCE_KEYS: [i32; 7] = [10, 5, 15, 7, 2, 9, 31];
const REFERENCE_ART: &str = "\
10
├─5
| ├─2
| └─7
|   └─9
└─15
  └─31";

#[test]
fn seeds_root_from_first_key() {
    let tree = SearchTree::<_>::from_keys(vec![7, 3]).unwrap();
    assert_eq!(*tree.root().key(), 7);
    assert!(tree.root().is_branch());
    assert_eq!(tree.len(), 2);
}

#[test]
fn empty_key_sequence_is_rejected() {
    assert_eq!(
        SearchTree::<i32>::from_keys(Vec::new()).unwrap_err(),
        EmptyKeysError,
    );
    assert_eq!(
        SearchTree::<i32>::from_keys_duplicating_first(Vec::new()).unwrap_err(),
        EmptyKeysError,
    );
}

#[test]
fn in_order_iteration_is_sorted() {
    let sequences: &[&[i32]] = &[
        &REFERENCE_KEYS,
        &[3, 1, 2],
        &[1, 1, 2, 1],
        &[42],
        &[6, 2, 8, 2, 6, 9, 0, -3],
    ];
    for keys in sequences {
        let tree = SearchTree::<_>::from_keys(keys.to_vec()).unwrap();
        let in_order = tree.iter().copied().collect::<Vec<_>>();
        let mut expected = keys.to_vec();
        expected.sort_unstable();
        assert_eq!(in_order, expected, "sequence: {:?}", keys);
        assert_eq!(tree.len(), keys.len());
    }
}

#[test]
fn single_key_renders_bare() {
    let tree = VecSearchTree::<i32>::from_keys(vec![5]).unwrap();
    assert_eq!(tree.len(), 1);
    assert!(tree.root().is_leaf());
    assert_eq!(tree.render().lines(), ["5"]);
    assert_eq!(tree.render().to_string(), "5");
}

#[test]
fn increasing_keys_make_a_right_chain() {
    let tree = SearchTree::<_>::from_keys(vec![1, 2, 3, 4]).unwrap();
    let mut node = tree.root();
    let mut depth = 1;
    loop {
        assert!(node.left_child().is_none());
        match node.right_child() {
            Some(right) => {
                node = right;
                depth += 1;
            }
            None => break,
        }
    }
    assert_eq!(depth, 4);
    assert_eq!(tree.render().to_string(), "1\n└─2\n  └─3\n    └─4");
}

#[test]
fn decreasing_keys_make_a_left_chain() {
    let tree = SearchTree::<_>::from_keys(vec![4, 3, 2, 1]).unwrap();
    let mut node = tree.root();
    let mut depth = 1;
    loop {
        assert!(node.right_child().is_none());
        match node.left_child() {
            Some(left) => {
                node = left;
                depth += 1;
            }
            None => break,
        }
    }
    assert_eq!(depth, 4);
    assert_eq!(tree.render().to_string(), "4\n└─3\n  └─2\n    └─1");
}

#[test]
fn reference_shape() {
    let tree = SearchTree::<_>::from_keys(REFERENCE_KEYS.to_vec()).unwrap();
    let root = tree.root();
    assert_eq!(*root.key(), 10);

    let five = root.left_child().unwrap();
    let fifteen = root.right_child().unwrap();
    assert_eq!(*five.key(), 5);
    assert_eq!(*fifteen.key(), 15);

    assert_eq!(*five.left_child().unwrap().key(), 2);
    let seven = five.right_child().unwrap();
    assert_eq!(*seven.key(), 7);
    // 9 is not less than 7, so it sits in 7's right slot
    assert!(seven.left_child().is_none());
    let nine = seven.right_child().unwrap();
    assert_eq!(*nine.key(), 9);
    assert!(nine.is_leaf());

    assert!(fifteen.left_child().is_none());
    let thirty_one = fifteen.right_child().unwrap();
    assert_eq!(*thirty_one.key(), 31);
    assert!(thirty_one.is_leaf());
}

#[test]
fn reference_rendering_is_pinned() {
    let tree = SearchTree::<_>::from_keys(REFERENCE_KEYS.to_vec()).unwrap();
    assert_eq!(tree.render().to_string(), REFERENCE_ART);
}

#[test]
fn rendering_is_idempotent() {
    let tree = SearchTree::<_>::from_keys(REFERENCE_KEYS.to_vec()).unwrap();
    assert_eq!(tree.render().to_string(), tree.render().to_string());
    assert_eq!(tree.render().lines(), tree.render().lines());
}

#[test]
fn equal_keys_descend_right() {
    let mut tree = SearchTree::<_>::new(5);
    tree.insert(5);
    let root = tree.root();
    assert!(root.left_child().is_none());
    assert_eq!(*root.right_child().unwrap().key(), 5);

    // A whole run of equal keys therefore forms a right-leaning chain
    let tree = SearchTree::<_>::from_keys(vec![5, 5, 5]).unwrap();
    let root = tree.root();
    let second = root.right_child().unwrap();
    let third = second.right_child().unwrap();
    assert!(root.left_child().is_none());
    assert!(second.left_child().is_none());
    assert!(third.is_leaf());
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 5, 5]);
}

#[test]
fn duplicating_first_reinserts_the_seed() {
    let tree = SearchTree::<_>::from_keys_duplicating_first(REFERENCE_KEYS.to_vec()).unwrap();
    assert_eq!(tree.len(), REFERENCE_KEYS.len() + 1);
    let in_order = tree.iter().copied().collect::<Vec<_>>();
    assert_eq!(in_order, [2, 5, 7, 9, 10, 10, 15, 31]);

    // The duplicate of the seed is the first key to get inserted, so it claims the root's
    // then-empty right slot and everything greater ends up below it
    let duplicate = tree.root().right_child().unwrap();
    assert_eq!(*duplicate.key(), 10);
    assert_eq!(*duplicate.right_child().unwrap().key(), 15);
}

#[test]
fn find_and_contains() {
    let tree = SearchTree::<_>::from_keys(REFERENCE_KEYS.to_vec()).unwrap();
    let seven = tree.find(&7).unwrap();
    assert_eq!(*seven.key(), 7);
    assert_eq!(*seven.parent().unwrap().key(), 5);
    assert!(tree.contains(&31));
    assert!(!tree.contains(&8));
    assert!(tree.find(&11).is_none());
}

#[test]
fn find_returns_topmost_equal() {
    let mut tree = SearchTree::<_>::new(5);
    tree.insert(5);
    assert!(tree.find(&5).unwrap().is_root());
}

#[test]
fn first_and_last() {
    let tree = SearchTree::<_>::from_keys(vec![10, 5, 15, 2]).unwrap();
    assert_eq!(*tree.first().key(), 2);
    assert_eq!(*tree.last().key(), 15);

    let tree = SearchTree::<_>::new(1);
    assert_eq!(*tree.first().key(), 1);
    assert_eq!(*tree.last().key(), 1);
}

#[test]
fn parent_and_child_relations() {
    let tree = SearchTree::<_>::from_keys(vec![2, 1, 3]).unwrap();
    let root = tree.root();
    assert!(root.is_root());
    assert!(root.is_full_branch());
    assert_eq!(root.is_left_child(), None);

    let one = root.left_child().unwrap();
    let three = root.right_child().unwrap();
    assert_eq!(one.is_left_child(), Some(true));
    assert_eq!(one.is_right_child(), Some(false));
    assert_eq!(three.is_right_child(), Some(true));
    assert_eq!(*one.parent().unwrap().key(), 2);
    assert_eq!(*three.parent().unwrap().key(), 2);
}

#[test]
fn insert_returns_the_new_index() {
    let mut tree = SearchTree::<_>::from_keys(vec![10, 5, 15]).unwrap();
    let index = tree.insert(12);
    let node = NodeRef::new_raw(&tree, index).unwrap();
    assert_eq!(*node.key(), 12);
    assert_eq!(*node.parent().unwrap().key(), 15);
    assert_eq!(node.is_left_child(), Some(true));
}

#[test]
fn iter_is_fused() {
    let tree = SearchTree::<_>::new(1);
    let mut iter = tree.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn arrayvec_storage() {
    let mut tree: SearchTree<u64, usize, ArrayVec<[Node<u64, usize>; 8]>> =
        SearchTree::new(1987);
    tree.insert(83);
    tree.insert(87);

    let left = tree.root().left_child().unwrap();
    assert_eq!(*left.key(), 83);
    assert_eq!(*left.right_child().unwrap().key(), 87);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [83, 87, 1987]);
}

#[cfg(feature = "smallvec")]
#[test]
fn smallvec_storage() {
    use smallvec::SmallVec;
    let tree: SearchTree<i32, usize, SmallVec<[Node<i32, usize>; 4]>> =
        SearchTree::from_keys(vec![3, 1, 2]).unwrap();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
}

#[cfg(feature = "slotmap")]
#[test]
fn slotmap_storage() {
    let tree = SlotMapSearchTree::<i32>::from_keys(REFERENCE_KEYS.to_vec()).unwrap();
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        [2, 5, 7, 9, 10, 15, 31],
    );
    assert!(tree.contains(&9));
    assert_eq!(tree.render().to_string(), REFERENCE_ART);
}
