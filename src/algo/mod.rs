/*!
# Graph Algorithms

Algorithms that only rely on the [`AdjacencyList`](crate::ops::AdjacencyList) capability and thus
work on every representation. Everything is re-exported at the top level of this module:
```rust
use dgraphs::algo::*;
```
*/

mod traversal;

use crate::{error::*, node::*, ops::*};

#[cfg(test)]
use crate::{edge::*, repr::*};

pub use traversal::*;
