//! A basic example showing minimal usage
//!
//! We construct a [`MedianTracker`], feed it a stream of integers, and then
//! read out the running median

use medianheap::MedianTracker;

/// Some sample data to calculate the median for
///
/// In practice, this will probably be a much larger stream
/// Note that the median is 44
const DATA: [i64; 15] = [18, 83, 21, 21, 63, 64, 4, 92, 31, 94, 2, 44, 70, 17, 61];

fn main() {
    let mut tracker = MedianTracker::new();

    // Read data points from our data source, and fold them into the tracker
    for data_point in DATA {
        tracker.insert(data_point);
    }

    // Get our answer out
    let median = tracker.median().expect("at least one element was inserted");
    println!("The median is: {median}");
}
