//! English narration, the reference locale

pub(crate) const MESSAGES: &[(&str, &str)] = &[
    // Sorting
    ("sort.compare", "Compare {a} and {b}"),
    ("sort.swap", "Swap {a} and {b}"),
    ("sort.in_place", "{value} is now in its final position (index {index})"),
    ("sort.done", "Sorted: {array}"),
    ("bubble.start", "Start bubble sort on {array}"),
    ("bubble.early_exit", "No swaps in this pass, so the array is already sorted"),
    ("selection.start", "Start selection sort on {array}"),
    ("selection.assume_min", "Assume {value} at index {index} is the minimum"),
    ("selection.new_min", "New minimum {value} at index {index}"),
    ("selection.no_swap", "{value} is already the minimum, no swap needed"),
    ("insertion.start", "Start insertion sort on {array}"),
    ("insertion.pick_key", "Take key {key} from index {index}"),
    ("insertion.compare", "Compare {value} with key {key}"),
    ("insertion.shift", "Shift {value} from index {from} to {to}"),
    ("insertion.insert", "Insert key {key} at index {index}"),
    ("quick.start", "Start quick sort on {array}"),
    ("quick.single", "Single element {value} at index {index} is in place"),
    ("quick.range", "Partition indices {low} to {high}"),
    ("quick.pivot", "Choose the last element {pivot} as pivot"),
    ("quick.compare", "Is {value} smaller than the pivot {pivot}?"),
    ("quick.stays", "{value} is not smaller than the pivot, it stays on the right"),
    ("quick.place_pivot", "Place pivot {pivot} at index {index}"),
    ("merge.start", "Start merge sort on {array}"),
    ("merge.split", "Split indices {left}..{right} at {mid}"),
    ("merge.copy_runs", "Merge the runs {left} and {right}"),
    ("merge.take_left", "Take {value} from the left run into index {k}"),
    ("merge.take_right", "Take {value} from the right run into index {k}"),
    ("merge.copy_rest", "Copy the remaining {value} into index {k}"),
    ("heap.start", "Start heap sort on {array}"),
    ("heap.compare_child", "Compare child {child} with the largest so far, {largest}"),
    ("heap.build", "Heapify the subtree rooted at index {index} ({value})"),
    ("heap.extract", "Move the maximum {value} to index {index}"),
    ("counting.start", "Maximum is {max}, allocate {size} counters"),
    ("counting.tally", "Count {value}: now seen {count} time(s)"),
    ("counting.prefix", "Running total up to {value} is {total}"),
    ("counting.place", "Place {value} at output index {index}"),
    ("radix.start", "Maximum is {max}, one pass per digit"),
    ("radix.pass", "Distribute by the digit at place value {exp}"),
    ("radix.digit", "{value} goes to bucket {digit}"),
    ("radix.collect", "Collect the buckets in order: {array}"),
    ("shell.start", "Start shell sort on {array} with gap {gap}"),
    ("shell.pick", "Hold {value} from index {index} (gap {gap})"),
    ("shell.compare", "Compare {value} with the held value {temp}"),
    ("shell.shift", "Shift {value} from index {from} to {to}"),
    ("shell.insert", "Drop {value} into index {index}"),
    ("shell.gap", "Halve the gap to {gap}"),
    // Searching
    ("search.start", "Search {array} for {target}"),
    ("search.compare", "Compare {value} at index {index} with {target}"),
    ("search.found", "Found {target} at index {index}"),
    ("search.not_found", "{target} is not in the array"),
    ("binary.start", "Binary search for {target} in {array}"),
    ("binary.mid", "Range {low}..{high}: middle index {mid} holds {value}"),
    ("binary.go_right", "{value} < {target}, discard the left half"),
    ("binary.go_left", "{value} > {target}, discard the right half"),
    ("jump.start", "Jump search for {target} in {array} with block size {block}"),
    ("jump.probe", "Check the block end at index {index}: {value} vs {target}"),
    ("jump.jump", "Too small, jump ahead: block now starts at {prev}, next probe at {step}"),
    ("interpolation.start", "Interpolation search for {target} in {array}"),
    ("interpolation.probe", "Estimated position {pos} holds {value}"),
    // Graphs
    ("bfs.start", "Start BFS at {node}"),
    ("bfs.dequeue", "Dequeue {node}; queue is now {queue}"),
    ("bfs.done", "BFS order: {order}"),
    ("graph.already_seen", "{node} was already discovered"),
    ("graph.discover", "Discover {to} from {from}"),
    ("dfs.start", "Start DFS at {node}"),
    ("dfs.pop", "Pop {node}; stack is now {stack}"),
    ("dfs.skip", "{node} was already visited, skip it"),
    ("dfs.visit", "Visit {node}"),
    ("dfs.push", "Push neighbour {node}"),
    ("dfs.done", "DFS order: {order}"),
    ("dijkstra.start", "Distance to {source} is 0, every other node starts at ∞"),
    ("dijkstra.stale", "Skip stale queue entry {node} ({dist})"),
    ("dijkstra.pop", "Take {node}, the closest unfinished node, at distance {dist}"),
    ("dijkstra.finalize", "Distance to {node} is final: {dist}"),
    ("dijkstra.finalized", "{node} is already final, no relaxation"),
    ("dijkstra.relax", "Shorter path to {to}: {old} → {new}"),
    ("dijkstra.keep", "Keep {to} at {current}; {candidate} is not shorter"),
    ("dijkstra.done", "All shortest distances from {source} are known"),
    ("prim.start", "Grow the tree from {node}; {count} nodes to connect"),
    ("prim.pop", "Cheapest candidate edge: {from}-{to} ({weight})"),
    ("prim.skip", "{node} is already in the tree, skip"),
    ("prim.add", "Add {from}-{to} ({weight}); total weight {total}"),
    ("prim.push", "New candidate edge {from}-{to} ({weight})"),
    ("prim.done", "Minimum spanning tree complete, total weight {total}"),
    ("topo.degrees", "In-degrees: {degrees}"),
    ("topo.sources", "Nodes with no prerequisites: {nodes}"),
    ("topo.output", "Output {node}"),
    ("topo.decrement", "Remove the edge into {node}; its in-degree is now {degree}"),
    ("topo.enqueue", "{node} has no remaining prerequisites, enqueue it"),
    ("topo.cycle", "Only {count} of {total} nodes were output: the graph has a cycle"),
    ("topo.done", "Topological order: {order}"),
    // Dynamic programming
    ("fib.alloc", "Allocate a table of {size} cells for fib({n})"),
    ("fib.base", "Base case: dp[{index}] = {value}"),
    ("fib.fill", "dp[{index}] = {a} + {b} = {value}"),
    ("fib.done", "fib({n}) = {value}"),
    ("knapsack.start", "{items} items, capacity {capacity}"),
    ("knapsack.too_heavy", "Weight {weight} exceeds capacity {capacity}, carry {value} down"),
    ("knapsack.take", "Taking the item gives {take}, more than {skip}"),
    ("knapsack.leave", "Taking the item gives {take}, not better than {skip}"),
    ("knapsack.done", "Best value with capacity {capacity}: {value}"),
    ("lcs.start", "Longest common subsequence of \"{a}\" and \"{b}\""),
    ("lcs.match", "Both are {ch}: diagonal + 1 = {value}"),
    ("lcs.no_match", "{a} ≠ {b}: take the larger neighbour, {value}"),
    ("lcs.traceback", "Trace back through the table: \"{sequence}\""),
    ("lcs.done", "LCS length is {length}"),
    // Backtracking
    ("queens.start", "Place {n} queens so that none attack each other"),
    ("queens.solved", "All {n} queens placed"),
    ("queens.conflict", "({row}, {col}) is attacked by the queen at ({qrow}, {qcol})"),
    ("queens.safe", "({row}, {col}) is safe"),
    ("queens.place", "Place a queen at ({row}, {col})"),
    ("queens.remove", "Backtrack: remove the queen from ({row}, {col})"),
    ("queens.exhausted", "No column works in row {row}, backtrack"),
    ("sudoku.start", "Solve the puzzle: {empty} empty cells"),
    ("sudoku.solved", "Every cell is filled: solved"),
    ("sudoku.conflict", "{digit} cannot go at ({row}, {col}): clashes with ({crow}, {ccol})"),
    ("sudoku.valid", "{digit} fits at ({row}, {col})"),
    ("sudoku.place", "Write {digit} at ({row}, {col})"),
    ("sudoku.undo", "Backtrack: erase {digit} from ({row}, {col})"),
    ("sudoku.dead_end", "No digit fits at ({row}, {col}), backtrack"),
    ("maze.start", "Find the shortest path from {start} to {goal}"),
    ("maze.dequeue", "Expand {cell} at distance {dist}"),
    ("maze.goal", "Reached the goal at distance {dist}"),
    ("maze.enqueue", "Discover {cell} at distance {dist}"),
    ("maze.no_path", "The goal cannot be reached"),
    ("maze.path", "Follow the parents back: {moves} moves"),
    ("maze.done", "Shortest path found with {moves} moves"),
    // Divide and conquer
    ("hanoi.start", "Move {disks} disks from {from} to {to}"),
    ("hanoi.move", "Move {count}: disk {disk} from {from} to {to}"),
    ("hanoi.done", "Done in {moves} moves"),
    // Concepts
    ("big_o.start", "How does the work grow as n goes from 1 to {max}?"),
    ("big_o.constant", "Constant: {ops} operation at n = {n}"),
    ("big_o.logarithmic", "Logarithmic: about {ops} halvings at n = {n}"),
    ("big_o.linear", "Linear: {ops} operations at n = {n}"),
    ("big_o.linearithmic", "Linearithmic: {ops} operations at n = {n}"),
    ("big_o.quadratic", "Quadratic: {ops} operations at n = {n}"),
    ("big_o.exponential", "Exponential: {ops} operations at n = {n}"),
    ("big_o.marker", "Compare every class at n = {n}"),
    ("big_o.done", "The gap widens quickly: growth rate matters more than constants"),
    ("recursion.call", "Call factorial({n}), stack depth {depth}"),
    ("recursion.base", "Base case: factorial({n}) = 1"),
    ("recursion.return", "factorial({n}) = {n} × {inner} = {result}"),
    ("recursion.done", "factorial({n}) = {result}"),
    ("two_pointers.start", "Find two values in {array} that add up to {target}"),
    ("two_pointers.sum", "{a} + {b} = {sum}"),
    ("two_pointers.found", "{a} + {b} hits the target (indices {left} and {right})"),
    ("two_pointers.move_left", "{sum} < {target}: move the left pointer right"),
    ("two_pointers.move_right", "{sum} > {target}: move the right pointer left"),
    ("two_pointers.none", "No pair adds up to {target}"),
    ("window.first", "First window of size {k}: {array}, sum {sum}"),
    ("window.best_init", "Best so far: {sum}"),
    ("window.slide", "Slide: add {added}, drop {removed}, sum {sum}"),
    ("window.new_best", "New best {sum} starting at index {start}"),
    ("window.done", "Maximum window sum {sum}, starting at index {start}"),
    ("memo.call", "Call fib({n})"),
    ("memo.hit", "fib({n}) is already in the memo: {value}"),
    ("memo.base", "Base case fib({n})"),
    ("memo.store", "Store fib({n}) = {value}"),
    ("memo.done", "fib({n}) = {value} with {calls} calls and {hits} memo hits"),
    ("coins.start", "Make {amount} from coins {coins}"),
    ("coins.take", "Greedy takes {coin}, {remaining} left"),
    ("coins.too_big", "{coin} is larger than the remaining {remaining}"),
    ("coins.greedy_done", "Greedy picked {picked}: {count} coins"),
    ("coins.dp_init", "DP table for amounts 0 to {amount}: dp[0] = 0"),
    ("coins.dp_improve", "dp[{a}] improves to {value} using coin {coin}"),
    ("coins.dp_keep", "Coin {coin} does not improve dp[{a}] = {value}"),
    ("coins.compare", "Greedy used {greedy} coins, the optimum is {dp}"),
    // Data structures
    ("sq.start", "Feed {values} to a stack and a queue"),
    ("sq.push", "Push {value} on top of the stack"),
    ("sq.enqueue", "Enqueue {value} at the back of the queue"),
    ("sq.pop", "Pop {value}: the newest element leaves first"),
    ("sq.dequeue", "Dequeue {value}: the oldest element leaves first"),
    ("sq.done", "Stack {stack}, queue {queue}"),
    ("list.append", "Append {value} at the tail"),
    ("list.walk", "Visit node {value}, looking for {target}"),
    ("list.insert", "Link a new node {value} after {after}"),
    ("list.found", "Found {value} at position {index}"),
    ("list.missing", "{value} is not in the list"),
    ("list.unlink", "Unlink node {value}"),
    ("list.done", "List is now {list}"),
    ("hash.start", "Empty table with {buckets} buckets"),
    ("hash.hash", "Hash \"{key}\": character sum {code}, bucket {bucket}"),
    ("hash.put", "Store \"{key}\" = {value} in bucket {bucket}"),
    ("hash.collision", "Collision: \"{key}\" joins bucket {bucket}, chain length {count}"),
    ("hash.lookup", "Look up \"{key}\" in bucket {bucket}"),
    ("hash.compare", "\"{candidate}\" is not \"{key}\", keep scanning"),
    ("hash.found", "Found \"{key}\" = {value}"),
    ("hash.missing", "\"{key}\" is not in bucket {bucket}"),
    ("hash.done", "{count} entries in {buckets} buckets"),
    ("bst.root", "{value} becomes the root"),
    ("bst.go_left", "{value} < {node}: go left"),
    ("bst.go_right", "{value} ≥ {node}: go right"),
    ("bst.place", "Empty spot: place {value} here"),
    ("bst.found", "Found {value}"),
    ("bst.missing", "Reached an empty subtree: {value} is not in the tree"),
    ("bst.done", "In-order traversal: {values}"),
    ("minheap.append", "Append {value} at index {index}"),
    ("minheap.compare", "Child {child} is smaller than its parent {parent}"),
    ("minheap.swap", "Swap: {child} moves up above {parent}"),
    ("minheap.settled", "{value} is not smaller than its parent {parent}, stop"),
    ("minheap.extract", "Remove the minimum {min}; move the last element {last} to the root"),
    ("minheap.sift", "Compare {value} with its smaller child {child}"),
    ("minheap.swap_down", "Swap: {value} moves down below {child}"),
    ("minheap.return", "Return the minimum {min}"),
    ("minheap.done", "Heap array: {array}"),
    // About paragraphs
    ("about.big-o", "Big O notation describes how the work an algorithm does grows with the size of its input. Constant and logarithmic growth stay flat, linear and linearithmic grow steadily, and quadratic or exponential growth quickly becomes impractical."),
    ("about.recursion", "A recursive function solves a problem by calling itself on a smaller version of it. Each call waits on the call stack until the base case returns, then the results flow back up."),
    ("about.two-pointers", "On a sorted array, two indices moving toward each other can find a pair with a given sum in linear time: a small sum moves the left pointer, a large one moves the right pointer."),
    ("about.sliding-window", "A sliding window keeps a running aggregate over a fixed-size range. Moving the window adds one element and removes another, so every window costs constant time."),
    ("about.memoization", "Memoization caches the result of each subproblem the first time it is computed. Repeated calls become lookups, turning the exponential naive Fibonacci into a linear one."),
    ("about.greedy-vs-dp", "A greedy algorithm commits to the locally best choice; dynamic programming considers every subproblem. With coins 1, 3 and 4, greedy pays 6 with three coins while the DP table finds two."),
    ("about.stack-queue", "A stack removes the most recently added element first (LIFO); a queue removes the oldest first (FIFO). Both add and remove in constant time."),
    ("about.linked-list", "A linked list stores elements in nodes that point to the next node. Inserting or removing after a known node is constant time, but finding a node requires walking from the head."),
    ("about.hash-table", "A hash table maps each key to a bucket with a hash function. Keys that land in the same bucket are chained, and a lookup only scans that one chain."),
    ("about.binary-search-tree", "In a binary search tree every node is larger than its left subtree and not larger than its right subtree, so insertion and search follow a single root-to-leaf path."),
    ("about.binary-heap", "A binary min-heap is a complete tree stored in an array where every parent is at most its children. New values sift up, and extracting the minimum sifts the last value down."),
    ("about.bubble-sort", "Bubble sort repeatedly swaps adjacent out-of-order pairs. After each pass the largest remaining value has bubbled to the end; a pass without swaps ends the sort early."),
    ("about.selection-sort", "Selection sort finds the minimum of the unsorted part and swaps it into the next position. It always makes O(n²) comparisons but at most n - 1 swaps."),
    ("about.insertion-sort", "Insertion sort grows a sorted prefix by inserting each new key into place, shifting larger values right. It is fast on nearly sorted input."),
    ("about.quick-sort", "Quick sort partitions the array around a pivot so smaller values end up on its left, then sorts both sides recursively. It averages O(n log n)."),
    ("about.merge-sort", "Merge sort splits the array in half, sorts each half and merges them. It is stable and always O(n log n), at the cost of extra memory."),
    ("about.heap-sort", "Heap sort builds a max-heap in place, then repeatedly moves the maximum to the end and restores the heap. It is O(n log n) with no extra memory."),
    ("about.counting-sort", "Counting sort tallies how often each value occurs, turns the tallies into positions with a running total, and places each element directly. It runs in O(n + k) for values up to k."),
    ("about.radix-sort", "Radix sort orders numbers digit by digit, least significant first, using a stable bucket pass for each digit."),
    ("about.shell-sort", "Shell sort runs insertion sort over elements a gap apart and shrinks the gap until it is 1, moving far-out-of-place values quickly."),
    ("about.linear-search", "Linear search checks every element in order until it finds the target. It works on any array and takes O(n)."),
    ("about.binary-search", "Binary search repeatedly halves a sorted range by comparing the target with the middle element, finding it in O(log n)."),
    ("about.jump-search", "Jump search skips ahead in blocks of √n on a sorted array, then scans linearly inside the block that may hold the target."),
    ("about.interpolation-search", "Interpolation search estimates where the target should be from the values at the ends of the range. On evenly spread data it needs very few probes."),
    ("about.bfs", "Breadth-first search explores a graph level by level with a queue, visiting every node at distance d before any node at distance d + 1."),
    ("about.dfs", "Depth-first search follows one branch as deep as possible before backtracking. This version uses an explicit stack."),
    ("about.dijkstra", "Dijkstra's algorithm finds shortest paths from a source in a graph with non-negative weights, always finalizing the closest unfinished node next."),
    ("about.prim", "Prim's algorithm grows a minimum spanning tree from one node, always adding the cheapest edge that connects a new node to the tree."),
    ("about.topological-sort", "Kahn's algorithm orders the nodes of a directed acyclic graph so every edge points forward, repeatedly outputting a node with no remaining prerequisites."),
    ("about.fibonacci", "Tabulation computes Fibonacci bottom-up: each cell is the sum of the previous two, so fib(n) takes n additions."),
    ("about.knapsack", "The 0/1 knapsack table holds the best value for each prefix of items and each capacity. Every cell chooses between leaving the item and taking it."),
    ("about.lcs", "The longest common subsequence table compares every prefix pair. Matching characters extend the diagonal; otherwise the cell takes the better neighbour. A traceback recovers the subsequence."),
    ("about.n-queens", "The N-Queens puzzle places N queens on an N×N board so that no two share a row, column or diagonal. Backtracking removes the last queen whenever a row has no safe square."),
    ("about.sudoku", "The solver fills empty cells one at a time with the first digit that fits its row, column and box, and erases it again when a later cell has no option."),
    ("about.maze", "Breadth-first search on a grid finds the shortest route through a maze. Each cell remembers where it was reached from, so the path can be traced back from the goal."),
    ("about.tower-of-hanoi", "To move n disks, move n - 1 disks out of the way, move the largest disk, then move the n - 1 disks on top of it. This takes 2ⁿ - 1 moves."),
];
